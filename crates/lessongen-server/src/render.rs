//! Server-side HTML for the single page.

use lessongen_core::export::EXPORT_FILENAME;
use html_escape::{encode_double_quoted_attribute, encode_text};
use lessongen_core::{Credential, Difficulty, FormState, Material, Outcome, Phase};
use pulldown_cmark::{html, Event, Options, Parser};

pub const PAGE_TITLE: &str = "교사용 ChatGPT 학습자료 생성기";
pub const PAGE_ICON: &str = "📚";
pub const HEADING: &str = "📚 ChatGPT 기반 맞춤형 학습자료 생성기";
pub const DESCRIPTION: &str =
    "교사의 요청을 입력하면 개념 설명, 연습 문제, 해설을 자동으로 생성합니다. (학습 관련 요청만 가능)";
pub const CREDENTIAL_INFO: &str = "OpenAI API 키를 입력하거나 secret 파일을 준비해 주세요.";
pub const GENERATE_LABEL: &str = "학습 자료 생성";
pub const SPINNER_LABEL: &str = "자료 생성 중...";
pub const DOWNLOAD_LABEL: &str = "자료를 md 파일로 저장";

const STYLE: &str = r#"
body { background-color: #f8f9fa; font-family: sans-serif; margin: 0; }
main { max-width: 730px; margin: 0 auto; padding: 3rem 1rem; }
label { display: block; margin-top: 1rem; font-weight: 600; }
select, textarea, input[type=password] { width: 100%; box-sizing: border-box; padding: .5rem; margin-top: .25rem; }
textarea { height: 120px; }
button, a.button { display: inline-block; margin-top: 1rem; padding: .5rem 1rem; border-radius: .4rem; border: 1px solid #ccc; background: #fff; color: inherit; text-decoration: none; cursor: pointer; }
button.primary { background: #ff4b4b; border-color: #ff4b4b; color: #fff; }
.info { background: #e8f0fe; padding: 1rem; border-radius: .4rem; margin-top: 1rem; }
.error { background: #fdecea; padding: 1rem; border-radius: .4rem; }
#spinner { margin-top: 1rem; }
#result { margin-top: 2rem; }
"#;

/// Everything the page needs, taken from the session's form under its lock.
#[derive(Debug, Clone)]
pub struct PageView {
    pub phase: Phase,
    pub show_credential_field: bool,
    pub difficulty: Difficulty,
    pub request: String,
    pub notice: Option<String>,
    pub material: Option<Material>,
}

impl PageView {
    /// `entered` is the key typed into the submission being answered, if any.
    pub fn from_form(
        form: &FormState,
        entered: Option<&Credential>,
        notice: Option<String>,
    ) -> Self {
        Self {
            phase: form.phase(entered),
            show_credential_field: !form.has_stored_credential(),
            difficulty: form.difficulty,
            request: form.request.clone(),
            notice,
            material: form.material().cloned(),
        }
    }
}

pub fn render_page(view: &PageView) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", encode_text(HEADING)));
    body.push_str(&format!("<p>{}</p>\n", encode_text(DESCRIPTION)));

    body.push_str(
        "<form method=\"post\" action=\"/generate\" \
         onsubmit=\"document.getElementById('spinner').hidden = false;\">\n",
    );
    body.push_str("<label for=\"difficulty\">난이도 선택</label>\n");
    body.push_str("<select id=\"difficulty\" name=\"difficulty\">\n");
    for d in Difficulty::ALL {
        let selected = if *d == view.difficulty { " selected" } else { "" };
        body.push_str(&format!(
            "<option value=\"{value}\"{selected}>{label}</option>\n",
            value = encode_double_quoted_attribute(d.label()),
            label = encode_text(d.label())
        ));
    }
    body.push_str("</select>\n");

    body.push_str("<label for=\"prompt\">학습 자료로 만들 요청을 입력하세요</label>\n");
    body.push_str(&format!(
        "<textarea id=\"prompt\" name=\"prompt\">{}</textarea>\n",
        encode_text(&view.request)
    ));

    if view.show_credential_field {
        body.push_str("<label for=\"api_key\">OpenAI API 키를 입력하세요</label>\n");
        body.push_str(
            "<input type=\"password\" id=\"api_key\" name=\"api_key\" autocomplete=\"off\">\n",
        );
    }

    body.push_str(&format!(
        "<button type=\"submit\" class=\"primary\">{}</button>\n",
        encode_text(GENERATE_LABEL)
    ));
    body.push_str("</form>\n");
    body.push_str(&format!(
        "<div id=\"spinner\" hidden>{}</div>\n",
        encode_text(SPINNER_LABEL)
    ));

    if view.phase == Phase::AwaitingCredential {
        body.push_str(&format!(
            "<div class=\"info\">{}</div>\n",
            encode_text(CREDENTIAL_INFO)
        ));
    } else if let Some(ref notice) = view.notice {
        body.push_str(&format!("<div class=\"info\">{}</div>\n", encode_text(notice)));
    }

    if let Some(ref material) = view.material {
        body.push_str("<section id=\"result\">\n");
        body.push_str(&render_outcome(&material.outcome));
        body.push_str(&format!(
            "<a class=\"button\" href=\"/download\" download=\"{EXPORT_FILENAME}\">{}</a>\n",
            encode_text(DOWNLOAD_LABEL)
        ));
        body.push_str("</section>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{icon}</text></svg>\">\n\
         <style>{STYLE}</style>\n</head>\n<body>\n<main>\n{body}</main>\n</body>\n</html>\n",
        title = encode_text(PAGE_TITLE),
        icon = PAGE_ICON,
    )
}

/// Successful output goes through markdown; failures go in an error box.
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Ok { content } => {
            format!("<div class=\"markdown\">\n{}</div>\n", markdown_to_html(content))
        }
        Outcome::Error { error } => format!(
            "<div class=\"error\" data-kind=\"{}\">{}</div>\n",
            encode_double_quoted_attribute(error.kind.as_str()),
            encode_text(&error.display_text())
        ),
    }
}

/// Render markdown. Raw HTML in the source is shown as text.
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
