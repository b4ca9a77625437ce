//! Server-rendered login page.

use crate::models::notification::Notification;
use crate::models::oauth::OAuthProvider;
use html_escape::encode_text;

#[derive(Debug, Default)]
pub struct LoginPage {
    pub google_enabled: bool,
    pub facebook_enabled: bool,
    pub notifications: Vec<Notification>,
}

impl LoginPage {
    pub fn is_enabled(&self, provider: OAuthProvider) -> bool {
        match provider {
            OAuthProvider::Google => self.google_enabled,
            OAuthProvider::Facebook => self.facebook_enabled,
        }
    }

    pub fn render(&self) -> String {
        let body = format!(
            r#"<h1 class="page-header">Welcome to our Demo App!</h1>
{toasts}
<h2 class="btn-header">Sign In with Google:</h2>
{google}
<h2 class="btn-header">Sign In with Facebook:</h2>
{facebook}
<span class="badge" aria-hidden="true">&#9733; Social Login Demo</span>"#,
            toasts = render_toasts(&self.notifications),
            google = self.render_button(OAuthProvider::Google, "Sign in with Google"),
            facebook = self.render_button(OAuthProvider::Facebook, "Login with Facebook"),
        );

        layout("Login", &body)
    }

    /// Each button is a plain GET form so clicking it is a full-page
    /// navigation, never a fetch.
    fn render_button(&self, provider: OAuthProvider, label: &str) -> String {
        let disabled = if self.is_enabled(provider) { "" } else { " disabled" };
        format!(
            r#"<form method="get" action="{action}">
  <button type="submit" class="btn btn-{class}"{disabled}>{label}</button>
</form>"#,
            action = provider.login_route(),
            class = provider.display_name().to_ascii_lowercase(),
        )
    }
}

fn render_toasts(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(|notification| {
            format!(
                r#"<div class="toast {}" role="alert">{}</div>"#,
                notification.level.css_class(),
                encode_text(&notification.message)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; display: flex; justify-content: center; }}
    main {{ display: flex; flex-direction: column; align-items: center; gap: 0.75rem; margin-top: 4rem; }}
    .btn {{ padding: 0.6rem 1.2rem; border: none; border-radius: 4px; color: #fff; cursor: pointer; font-size: 1rem; }}
    .btn-google {{ background: #4285f4; }}
    .btn-facebook {{ background: #3b5998; }}
    .btn:disabled {{ opacity: 0.5; cursor: not-allowed; }}
    .toast {{ padding: 0.75rem 1rem; border-radius: 4px; }}
    .toast-error {{ background: #fdecea; color: #b71c1c; }}
    .badge {{ margin-top: 2rem; color: #888; }}
  </style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#
    )
}
