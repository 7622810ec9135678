use crate::content::{Tutorial, TECHNIQUES, TUTORIALS};
use crate::quiz::{ProgressMark, QuizSession};
use crate::style::{CenteringMethod, PlaygroundParams, StyleDescriptor, CONTENT_SIZE_RANGE, PARENT_SIZE_RANGE};

use super::util::{html_escape, plural};

fn code_block(code: &str) -> String {
    format!(
        r#"<pre class="code"><code class="language-css">{}</code></pre>"#,
        html_escape(code.trim())
    )
}

pub(super) fn build_techniques() -> String {
    let mut html = String::from(r#"<div class="techniques">"#);
    for t in &TECHNIQUES {
        html.push_str(&format!(
            r#"<div class="card technique" id="{id}">
  <h3>{title}</h3>
  <p>{description}</p>
  {code}
</div>"#,
            id = t.method.as_str(),
            title = html_escape(t.title),
            description = html_escape(t.description),
            code = code_block(t.code),
        ));
    }
    html.push_str("</div>");
    html
}

pub(super) fn build_playground(params: &PlaygroundParams, style: &StyleDescriptor) -> String {
    let method_options: String = CenteringMethod::ALL
        .iter()
        .map(|m| {
            let selected = if *m == params.method() { " selected" } else { "" };
            format!(r#"<option value="{}"{selected}>{}</option>"#, m.as_str(), m.label())
        })
        .collect();

    format!(
        r#"<h2 class="panel-title">Div Centering Playground</h2>
<div class="playground">
  <form class="card controls" id="controls" method="get" action="/playground">
    <h3>Centering Controls</h3>
    <div class="field">
      <label for="method">Centering Method</label>
      <select id="method" name="method">{method_options}</select>
    </div>
    <div class="field">
      <label for="parent">Parent Container Size</label>
      <input type="range" id="parent" name="parent" min="{pmin}" max="{pmax}" value="{parent}">
      <span data-for="parent">{parent}px</span>
    </div>
    <div class="field">
      <label for="content">Content Div Size</label>
      <input type="range" id="content" name="content" min="{cmin}" max="{cmax}" value="{content}">
      <span data-for="content">{content}px</span>
    </div>
    <noscript><button class="btn" type="submit">Apply</button></noscript>
  </form>
  <div class="visual">
    <div class="preview-parent" style="{container_style}">
      <div style="{content_style}">Centered Div</div>
    </div>
  </div>
</div>
{snippet}
<script>
  (function() {{
    var form = document.getElementById('controls');
    form.addEventListener('change', function() {{ form.submit(); }});
    form.querySelectorAll('input[type=range]').forEach(function(el) {{
      el.addEventListener('input', function() {{
        form.querySelector('span[data-for=' + el.name + ']').textContent = el.value + 'px';
      }});
    }});
  }})();
</script>"#,
        method_options = method_options,
        pmin = PARENT_SIZE_RANGE.start(),
        pmax = PARENT_SIZE_RANGE.end(),
        parent = params.parent_size(),
        cmin = CONTENT_SIZE_RANGE.start(),
        cmax = CONTENT_SIZE_RANGE.end(),
        content = params.content_size(),
        container_style = html_escape(&style.container.to_inline()),
        content_style = html_escape(&style.content.to_inline()),
        snippet = code_block(&style.snippet),
    )
}

pub(super) fn build_tutorials(current: &Tutorial, open: Option<usize>) -> String {
    let picker: String = TUTORIALS
        .iter()
        .map(|t| {
            let cls = if t.id == current.id { r#" class="active""# } else { "" };
            format!(
                r#"<a href="/tutorials?topic={id}"{cls}>{title}</a>"#,
                id = t.id,
                title = html_escape(t.title),
            )
        })
        .collect();

    let mut sections = String::new();
    for (i, section) in current.sections.iter().enumerate() {
        let is_open = open == Some(i);
        // Clicking an open section collapses it.
        let href = if is_open {
            format!("/tutorials?topic={}", current.id)
        } else {
            format!("/tutorials?topic={}&amp;open={i}", current.id)
        };
        sections.push_str(&format!(
            r#"<div class="section"><a class="section-head" href="{href}"><span>{heading}</span><span>{arrow}</span></a>"#,
            heading = html_escape(section.heading),
            arrow = if is_open { "&#9660;" } else { "&#9658;" },
        ));
        if is_open {
            sections.push_str(&format!(
                r#"<div class="section-body"><p>{}</p>{}</div>"#,
                html_escape(section.content),
                code_block(section.code),
            ));
        }
        sections.push_str("</div>");
    }

    format!(
        r#"<h2 class="panel-title">Div Centering Deep Dive</h2>
<div class="tutorial-picker">{picker}</div>
<div class="card">{sections}</div>"#
    )
}

pub(super) fn build_quiz(session: &QuizSession) -> String {
    let Some(question) = session.current_question() else {
        return format!(
            r#"<div class="card completed">
  <h2 class="panel-title">Quiz Completed! &#127881;</h2>
  <p>Your Score: {score} / {total}</p>
  <form method="post" action="/quiz/reset"><button class="btn" type="submit">Retake Quiz</button></form>
</div>"#,
            score = session.score(),
            total = session.total(),
        );
    };

    let selected = session.selected_option();
    let disabled = if selected.is_some() { " disabled" } else { "" };

    let mut options = String::new();
    for (i, option) in question.options.iter().enumerate() {
        let (cls, mark) = match selected {
            Some(_) if question.is_correct(i) => (" correct", r#"<span class="mark">&#10003;</span>"#),
            Some(s) if s == i => (" wrong", r#"<span class="mark">&#10007;</span>"#),
            _ => ("", ""),
        };
        options.push_str(&format!(
            r#"<button class="option{cls}" type="submit" name="option" value="{i}"{disabled}>{text}{mark}</button>"#,
            text = html_escape(option),
        ));
    }

    let feedback = match selected {
        Some(s) => {
            let verdict = if question.is_correct(s) {
                "&#127881; Correct!"
            } else {
                "&#10060; Incorrect"
            };
            let next = if session.is_last_question() { "Finish Quiz" } else { "Next Question" };
            format!(
                r#"<div class="feedback">
  <h4>{verdict}</h4>
  <p>{explanation}</p>
  <form method="post" action="/quiz/next"><button class="btn" type="submit">{next}</button></form>
</div>"#,
                explanation = html_escape(&question.explanation),
            )
        }
        None => String::new(),
    };

    let dots: String = session
        .progress_marks()
        .iter()
        .map(|mark| {
            let cls = match mark {
                ProgressMark::Done => "dot done",
                ProgressMark::Current => "dot current",
                ProgressMark::Upcoming => "dot",
            };
            format!(r#"<div class="{cls}"></div>"#)
        })
        .collect();

    let total = session.total();
    format!(
        r#"<h2 class="panel-title">Div Centering Quiz Challenge</h2>
<div class="card quiz">
  <h3>Question {number} of {total}</h3>
  <p class="prompt">{prompt}</p>
  <form class="options" method="post" action="/quiz/answer">{options}</form>
  {feedback}
</div>
<div class="dots" title="{total} question{s}">{dots}</div>"#,
        number = session.current_index() + 1,
        prompt = html_escape(&question.prompt),
        s = plural(total),
    )
}
