use chrono::Datelike;

use super::css::build_css;
use super::util::html_escape;

/// The four panels reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Section {
    Techniques,
    Playground,
    Tutorials,
    Quiz,
}

impl Section {
    const ALL: [Section; 4] = [Self::Techniques, Self::Playground, Self::Tutorials, Self::Quiz];

    fn path(self) -> &'static str {
        match self {
            Self::Techniques => "/techniques",
            Self::Playground => "/playground",
            Self::Tutorials => "/tutorials",
            Self::Quiz => "/quiz",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Techniques => "Centering Techniques",
            Self::Playground => "Interactive Playground",
            Self::Tutorials => "Detailed Tutorials",
            Self::Quiz => "Challenge Quiz",
        }
    }
}

fn build_nav(active: Option<Section>) -> String {
    let links: Vec<String> = Section::ALL
        .iter()
        .map(|s| {
            let cls = if Some(*s) == active { r#" class="active""# } else { "" };
            format!(r#"<a href="{}"{cls}>{}</a>"#, s.path(), s.title())
        })
        .collect();
    format!(r#"<nav class="nav">{}</nav>"#, links.join("\n  "))
}

/// Wrap a panel in the site shell (header, navigation, footer).
pub(super) fn build_page(active: Section, body: &str) -> String {
    build_shell(Some(active), active.title(), body)
}

pub(super) fn build_error_page(error: &str) -> String {
    let body = format!(
        r#"<div class="error-box">
  <strong>Something went wrong</strong>
  <p>{}</p>
  <p><a href="/">Back to the techniques</a></p>
</div>"#,
        html_escape(error)
    );
    build_shell(None, "Error", &body)
}

fn build_shell(active: Option<Section>, title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Div Centering Wizardry</title>
<meta name="description" content="Learn the magical art of div centering with humor and style!">
<style>
{css}
</style>
</head>
<body>
<main>
<header class="site-header">
  <h1>CSS Centering Mastery</h1>
  <p>Explore powerful techniques to center elements with precision and elegance</p>
</header>
{nav}
{body}
</main>
<footer>
  <p>Made with &#10084;&#65039; by Div Centering Enthusiasts <span>&copy; {year}</span></p>
</footer>
</body>
</html>"##,
        title = html_escape(title),
        css = build_css(),
        nav = build_nav(active),
        year = chrono::Local::now().year(),
        body = body,
    )
}
