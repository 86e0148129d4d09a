//! Plain-HTML rendering for the form and dashboard pages.

use data_model_trk::models::{Group, Trainer};
use directory_trk::Account;

/// Minimal escaping for text and attribute positions.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn register_form() -> String {
    page(
        "Register",
        concat!(
            "<h1>Register a trainer</h1>\n",
            "<form method=\"post\" action=\"/register\">\n",
            "  <label>Email <input type=\"email\" name=\"email\" required></label><br>\n",
            "  <label>Password <input type=\"password\" name=\"password\" required></label><br>\n",
            "  <label>Name <input type=\"text\" name=\"name\" required></label><br>\n",
            "  <label>API key <input type=\"text\" name=\"apikey\" required></label><br>\n",
            "  <label>Admin secret <input type=\"password\" name=\"admin\" required></label><br>\n",
            "  <button type=\"submit\">Register</button>\n",
            "</form>",
        ),
    )
}

pub fn login_form() -> String {
    page(
        "Login",
        concat!(
            "<h1>Log in</h1>\n",
            "<form method=\"post\" action=\"/login\">\n",
            "  <label>Email <input type=\"email\" name=\"email\" required></label><br>\n",
            "  <label>Password <input type=\"password\" name=\"password\" required></label><br>\n",
            "  <button type=\"submit\">Log in</button>\n",
            "</form>",
        ),
    )
}

/// Group-registration form: existing groups for reference, directory
/// usernames as autocomplete candidates.
pub fn register_group_form(groups: &[Group], accounts: &[Account]) -> String {
    let mut body = String::from("<h1>Register a group</h1>\n");

    if !groups.is_empty() {
        body.push_str("<h2>Existing groups</h2>\n<ul>\n");
        for group in groups {
            body.push_str(&format!("  <li>{}</li>\n", escape(&group.group_name)));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(concat!(
        "<form method=\"post\" action=\"/register-group\">\n",
        "  <label>Group name <input type=\"text\" name=\"group_name\" required></label><br>\n",
        "  <label>Students <input type=\"text\" name=\"names\" list=\"usernames\"",
        " placeholder=\"comma-separated usernames\"></label><br>\n",
        "  <datalist id=\"usernames\">\n",
    ));
    for account in accounts {
        body.push_str(&format!("    <option value=\"{}\">\n", escape(&account.username)));
    }
    body.push_str("  </datalist>\n  <button type=\"submit\">Register group</button>\n</form>");

    page("Register group", &body)
}

pub fn dashboard(trainer: &Trainer) -> String {
    let mut body = format!(
        "<h1>Dashboard</h1>\n<p>Signed in as {} ({})</p>\n",
        escape(&trainer.name),
        escape(&trainer.email)
    );

    if trainer.groups.is_empty() {
        body.push_str("<p>No groups yet.</p>\n");
    } else {
        body.push_str("<h2>Your groups</h2>\n<ul>\n");
        for group_name in &trainer.groups {
            body.push_str(&format!("  <li>{}</li>\n", escape(group_name)));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<p><a href=\"/logout\">Log out</a></p>");
    page("Dashboard", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_form_has_all_fields() {
        let html = register_form();
        for field in ["email", "password", "name", "apikey", "admin"] {
            assert!(html.contains(&format!("name=\"{field}\"")), "missing field {field}");
        }
    }

    #[test]
    fn test_login_form_posts_to_login() {
        let html = login_form();
        assert!(html.contains("action=\"/login\""));
        assert!(html.contains("name=\"password\""));
    }

    #[test]
    fn test_group_form_offers_candidate_usernames() {
        let groups = vec![Group::new("starters".to_string(), vec!["1".to_string()])];
        let accounts = vec![Account {
            id: "1".to_string(),
            username: "ash".to_string(),
            acct: "ash".to_string(),
            display_name: "Ash".to_string(),
        }];
        let html = register_group_form(&groups, &accounts);
        assert!(html.contains("<li>starters</li>"));
        assert!(html.contains("<option value=\"ash\">"));
    }

    #[test]
    fn test_dashboard_escapes_trainer_fields() {
        let mut trainer = Trainer::new(
            "ash@example.com".to_string(),
            "hash".to_string(),
            "<script>alert(1)</script>".to_string(),
            "key".to_string(),
        );
        trainer.groups.push("a&b".to_string());
        let html = dashboard(&trainer);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a&amp;b"));
    }
}
