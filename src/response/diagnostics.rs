//! Diagnostic page listing the request environment and parameters.

use crate::request::ParamMap;
use html_escape::encode_text;
use std::fmt::Write;

pub const DIAGNOSTICS_TITLE: &str = "CGI Diagnostics";
pub const DIAGNOSTICS_HEADING: &str = "CGI Request Dump";
pub const CONFIRMATION: &str = "The CGI program ran and received the request data below.";

pub const ENV_SECTION: &str = "Environment";
pub const GET_SECTION: &str = "GET parameters";
pub const POST_SECTION: &str = "POST parameters";

/// Render the environment, GET and POST data as an HTML page.
///
/// Each section lists `key => value` lines inside a `<pre>` block, in the
/// order the inputs enumerate them. Repeated parameters are shown as a
/// bracketed list. Keys and values are HTML-escaped.
pub fn dump_diagnostics(env: &[(String, String)], get: &ParamMap, post: &ParamMap) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", DIAGNOSTICS_TITLE);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{}</h1>", DIAGNOSTICS_HEADING);
    let _ = writeln!(html, "<p>{}</p>", CONFIRMATION);

    push_section(
        &mut html,
        ENV_SECTION,
        env.iter().map(|(k, v)| (k.as_str(), v.clone())),
    );
    push_section(&mut html, GET_SECTION, param_lines(get));
    push_section(&mut html, POST_SECTION, param_lines(post));

    html.push_str("</body>\n</html>\n");
    html
}

fn param_lines(params: &ParamMap) -> impl Iterator<Item = (&str, String)> {
    params.iter().map(|(key, values)| {
        let shown = match values {
            [single] => single.clone(),
            many => format!("[{}]", many.join(", ")),
        };
        (key, shown)
    })
}

fn push_section<'a>(html: &mut String, label: &str, lines: impl Iterator<Item = (&'a str, String)>) {
    let _ = writeln!(html, "<h2>{}</h2>", label);
    html.push_str("<pre>\n");
    for (key, value) in lines {
        let _ = writeln!(html, "{} => {}", encode_text(key), encode_text(&value));
    }
    html.push_str("</pre>\n");
}
