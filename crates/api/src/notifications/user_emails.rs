//! Templates for account lifecycle email.

use super::escape_html;

/// Welcome message sent after an account is created by staff. The
/// password is communicated by the creating admin out of band.
pub fn welcome_html(name: &str, email: &str) -> String {
    format!(
        "<div style=\"font-family:Arial,sans-serif;max-width:600px\">\
         <h2>Welcome to IEEE YPSL</h2>\
         <p>Hi {name},</p>\
         <p>An account has been created for you on the IEEE Young \
         Professionals Sri Lanka content platform. Sign in with \
         <strong>{email}</strong> and the password your administrator \
         shared with you.</p>\
         <p>Please change your password after your first sign-in.</p>\
         <p>IEEE Young Professionals Sri Lanka</p>\
         </div>",
        name = escape_html(name),
        email = escape_html(email),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_email_addresses_the_user() {
        let html = welcome_html("Kasun Silva", "kasun@example.com");
        assert!(html.contains("Hi Kasun Silva"));
        assert!(html.contains("kasun@example.com"));
    }

    #[test]
    fn welcome_email_escapes_name() {
        let html = welcome_html("<img src=x>", "a@b.com");
        assert!(html.contains("&lt;img src=x&gt;"));
    }
}
