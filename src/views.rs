//! HTML pages. Every dynamic value goes through [`escape`].

use crate::db::Post;
use std::fmt::Write;

const BRAND: &str = "TechTrends";

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no">
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css">
<title>{title} - {BRAND}</title>
</head>
<body>
<nav class="navbar navbar-expand-md navbar-light bg-light">
<a class="navbar-brand" href="/">{BRAND}</a>
<ul class="navbar-nav mr-auto">
<li class="nav-item"><a class="nav-link" href="/about">About</a></li>
<li class="nav-item"><a class="nav-link" href="/create">New Post</a></li>
</ul>
</nav>
<div class="container">
{body}
</div>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn index(posts: &[Post]) -> String {
    let mut body = format!("<h1>Welcome to {BRAND}</h1>\n");
    for post in posts {
        let _ = write!(
            body,
            "<a href=\"/{id}\"><h2>{title}</h2></a>\n<span class=\"badge badge-primary\">{created}</span>\n<hr>\n",
            id = post.id,
            title = escape(&post.title),
            created = post.created,
        );
    }
    layout(BRAND, &body)
}

pub fn post(post: &Post) -> String {
    let body = format!(
        "<h2>{title}</h2>\n<span class=\"badge badge-primary\">{created}</span>\n<p>{content}</p>\n",
        title = escape(&post.title),
        created = post.created,
        content = escape(&post.content),
    );
    layout(&post.title, &body)
}

pub fn about() -> String {
    layout(
        "About",
        "<h1>About TechTrends</h1>\n<p>This is a news sharing portal for the latest trends and updates in the Cloud Native ecosystem.</p>\n",
    )
}

/// Post creation form. `warning` is shown above the form when present; the
/// submitted values are echoed back so the user does not lose their input.
pub fn create(warning: Option<&str>, title: &str, content: &str) -> String {
    let mut body = String::from("<h1>Create a New Post</h1>\n");
    if let Some(message) = warning {
        let _ = writeln!(
            body,
            "<div class=\"alert alert-danger\">{}</div>",
            escape(message)
        );
    }
    let _ = write!(
        body,
        r#"<form method="post">
<div class="form-group">
<label for="title">Title</label>
<input type="text" name="title" placeholder="Post title" class="form-control" value="{title}">
</div>
<div class="form-group">
<label for="content">Content</label>
<textarea name="content" placeholder="Post content" class="form-control">{content}</textarea>
</div>
<div class="form-group">
<button type="submit" class="btn btn-primary">Submit</button>
</div>
</form>
"#,
        title = escape(title),
        content = escape(content),
    );
    layout("Create a New Post", &body)
}

pub fn not_found() -> String {
    layout(
        "Not Found",
        "<h1>404 Not Found</h1>\n<p>That page does not exist!</p>\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(title: &str) -> Post {
        Post {
            id: 7,
            created: NaiveDate::from_ymd_opt(2021, 3, 4)
                .and_then(|d| d.and_hms_opt(5, 6, 7))
                .expect("valid timestamp"),
            title: title.to_string(),
            content: "body".to_string(),
        }
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn index_links_each_post_with_escaped_title() {
        let page = index(&[sample("<script>")]);
        assert!(page.contains(r#"<a href="/7">"#));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
        assert!(page.contains("2021-03-04 05:06:07"));
    }

    #[test]
    fn create_form_shows_warning_only_when_given() {
        assert!(!create(None, "", "").contains("alert"));
        let page = create(Some("Title is required!"), "", "draft");
        assert!(page.contains("Title is required!"));
        assert!(page.contains(">draft</textarea>"));
    }
}
