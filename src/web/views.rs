//! Server-rendered pages for HobbyHub.
//!
//! The rendering contract is small: pages receive the ordered error list
//! and the echoed field values, and every user-supplied value is escaped
//! before it lands in markup. Styling is intentionally absent.

use crate::config::SiteConfig;
use crate::session::{CurrentUser, Flash};

/// Escape a value for embedding in HTML text or attribute context.
pub fn escape_html(value: &str) -> String {
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

/// Shared page shell: title, optional flash banner, body.
fn layout(site: &SiteConfig, title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash_html = match flash {
        Some(flash) => format!(
            "<p class=\"flash flash-{}\">{}</p>\n",
            flash.level.as_str(),
            escape_html(&flash.message)
        ),
        None => String::new(),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} - {site_name}</title>\n\
         </head>\n\
         <body>\n\
         <header><h1>{site_name}</h1><p>{site_description}</p></header>\n\
         {flash_html}\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
        site_name = escape_html(&site.name),
        site_description = escape_html(&site.description),
    )
}

/// The ordered error list block, or nothing when there are no errors.
fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut out = format!(
        "<div class=\"errors\">\n<h3>There were {} errors with your submission</h3>\n<ul>\n",
        errors.len()
    );
    for error in errors {
        out.push_str("<li>");
        out.push_str(&escape_html(error));
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n</div>\n");
    out
}

/// The registration form, re-echoing name and email but never passwords.
pub fn register_page(
    site: &SiteConfig,
    errors: &[String],
    name: &str,
    email: &str,
    flash: Option<&Flash>,
) -> String {
    let body = format!(
        "{errors}\
         <form action=\"/register\" method=\"POST\">\n\
         <label for=\"name\">Full name</label>\n\
         <input id=\"name\" name=\"name\" type=\"text\" value=\"{name}\">\n\
         <label for=\"email\">Email address</label>\n\
         <input id=\"email\" name=\"email\" type=\"email\" value=\"{email}\">\n\
         <label for=\"password\">Password (min 8 characters)</label>\n\
         <input id=\"password\" name=\"password\" type=\"password\">\n\
         <label for=\"confirm_password\">Confirm Password</label>\n\
         <input id=\"confirm_password\" name=\"confirm_password\" type=\"password\">\n\
         <button type=\"submit\">Create Account</button>\n\
         </form>\n\
         <p>Already have an account? <a href=\"/login\">Sign in instead</a></p>",
        errors = error_list(errors),
        name = escape_html(name),
        email = escape_html(email),
    );

    layout(site, "Join", flash, &body)
}

/// The login form, re-echoing the email only.
pub fn login_page(
    site: &SiteConfig,
    errors: &[String],
    email: &str,
    flash: Option<&Flash>,
) -> String {
    let body = format!(
        "{errors}\
         <form action=\"/login\" method=\"POST\">\n\
         <label for=\"email\">Email address</label>\n\
         <input id=\"email\" name=\"email\" type=\"email\" value=\"{email}\">\n\
         <label for=\"password\">Password</label>\n\
         <input id=\"password\" name=\"password\" type=\"password\">\n\
         <button type=\"submit\">Sign In</button>\n\
         </form>\n\
         <p>New here? <a href=\"/register\">Create an account</a></p>",
        errors = error_list(errors),
        email = escape_html(email),
    );

    layout(site, "Sign In", flash, &body)
}

/// The dashboard greeting for a signed-in user.
pub fn dashboard_page(site: &SiteConfig, user: &CurrentUser, flash: Option<&Flash>) -> String {
    let body = format!(
        "<h2>Welcome, {name}!</h2>\n\
         <form action=\"/logout\" method=\"POST\">\n\
         <button type=\"submit\">Sign Out</button>\n\
         </form>",
        name = escape_html(&user.name),
    );

    layout(site, "Dashboard", flash, &body)
}
