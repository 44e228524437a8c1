//! Page renderers.
//!
//! Each renderer is a pure function of its view model: the same model
//! always produces the same bytes. Sections backed by an empty or absent
//! value are left out of the markup entirely.

use std::fmt::Write;

use super::html::{document, escape, image, language_switcher, list};
use super::model::{
    CaseStudyView, ContactView, HomeView, NotFoundView, ProjectLink, ProjectPageView,
};
use crate::branding;

/// Body class marking a page whose scrolling is suspended.
pub const SCROLL_LOCKED_CLASS: &str = "scroll-locked";

fn header(brand_href: &str, brand: &str, nav: &str, languages: &str) -> String {
    let mut out = String::from("<header class=\"site-header\">\n");
    let _ = writeln!(
        out,
        "<a class=\"brand\" href=\"{}\">{}</a>",
        escape(brand_href),
        escape(brand)
    );
    out.push_str(nav);
    out.push_str(languages);
    out.push_str("</header>\n");
    out
}

fn contact_footer(contact: &ContactView) -> String {
    let mut out = String::from("<footer id=\"contact\" class=\"contact\">\n");
    let _ = writeln!(out, "<h2>{}</h2>", escape(&contact.heading));
    let _ = writeln!(
        out,
        "<a class=\"email\" href=\"mailto:{0}\">{0}</a>",
        escape(&contact.email)
    );
    if let Some(linkedin) = &contact.linkedin {
        let _ = writeln!(
            out,
            "<a class=\"linkedin\" href=\"{}\" rel=\"noopener\" target=\"_blank\">LinkedIn</a>",
            escape(linkedin)
        );
    }
    let _ = writeln!(out, "<p class=\"copyright\">{}</p>", escape(&contact.copyright));
    out.push_str("</footer>\n");
    out
}

/// Case-study sections shared by the overlay and the routed page.
fn case_study_body(study: &CaseStudyView) -> String {
    let headings = &study.headings;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "<article class=\"case-study\" data-project=\"{}\" style=\"--accent: {}\">",
        escape(&study.id),
        escape(&study.accent_color)
    );

    out.push_str("<section class=\"cs-hero\">\n");
    out.push_str(&image(&study.hero_image, "cs-hero-image"));
    out.push('\n');
    let _ = writeln!(out, "<p class=\"category\">{}</p>", escape(&study.category));
    let _ = writeln!(out, "<h1>{}</h1>", escape(&study.title));
    let _ = writeln!(out, "<p class=\"description\">{}</p>", escape(&study.description));
    out.push_str(&list("tags", &study.tags));
    out.push_str("</section>\n");

    out.push_str("<dl class=\"cs-meta\">\n");
    let _ = writeln!(
        out,
        "<div><dt>{}</dt><dd>{}</dd></div>",
        escape(&headings.role),
        escape(&study.role)
    );
    let _ = writeln!(
        out,
        "<div><dt>{}</dt><dd>{}</dd></div>",
        escape(&headings.timeline),
        escape(&study.timeline)
    );
    let _ = writeln!(
        out,
        "<div><dt>{}</dt><dd>{}</dd></div>",
        escape(&headings.tools),
        escape(&study.tools.join(", "))
    );
    out.push_str("</dl>\n");

    for (class, heading, body) in [
        ("cs-overview", &headings.overview, &study.overview),
        ("cs-problem", &headings.problem, &study.problem),
        ("cs-solution", &headings.solution, &study.solution),
    ] {
        let _ = writeln!(
            out,
            "<section class=\"{class}\"><h2>{}</h2><p>{}</p></section>",
            escape(heading),
            escape(body)
        );
    }

    out.push_str("<section class=\"cs-process\">\n");
    let _ = writeln!(out, "<h2>{}</h2>", escape(&headings.process));
    out.push_str("<ol>");
    for step in &study.process {
        let _ = write!(
            out,
            "<li><span class=\"step-number\">{:02}</span> {}</li>",
            step.number,
            escape(&step.title)
        );
    }
    out.push_str("</ol>\n</section>\n");

    if let Some(persona) = &study.persona {
        out.push_str("<section class=\"cs-persona\">\n");
        let _ = writeln!(out, "<h2>{}</h2>", escape(&persona.heading));
        let _ = writeln!(out, "<h3>{}</h3>", escape(&persona.name));
        let _ = writeln!(out, "<p>{}</p>", escape(&persona.description));
        if let Some(quote) = &persona.quote {
            let _ = writeln!(out, "<blockquote>{}</blockquote>", escape(quote));
        }
        let _ = writeln!(out, "<h4>{}</h4>", escape(&persona.goals_heading));
        out.push_str(&list("goals", &persona.goals));
        let _ = writeln!(out, "<h4>{}</h4>", escape(&persona.frustrations_heading));
        out.push_str(&list("frustrations", &persona.frustrations));
        out.push_str("</section>\n");
    }

    if !study.insights.is_empty() {
        out.push_str("<section class=\"cs-insights\">\n");
        let _ = writeln!(out, "<h2>{}</h2>", escape(&headings.insights));
        for insight in &study.insights {
            let _ = writeln!(
                out,
                "<div class=\"insight\"><span class=\"label\">{}</span><h3>{}</h3><p>{}</p></div>",
                escape(&insight.label),
                escape(&insight.title),
                escape(&insight.body)
            );
        }
        out.push_str("</section>\n");
    }

    if let Some(concept) = &study.logo_concept {
        let _ = writeln!(
            out,
            "<section class=\"cs-brand\"><h2>{}</h2><p>{}</p></section>",
            escape(&headings.brand),
            escape(concept)
        );
    }

    if let Some(system) = &study.design_system {
        out.push_str("<section class=\"cs-design-system\">\n");
        let _ = writeln!(out, "<h2>{}</h2>", escape(&system.heading));
        let _ = writeln!(out, "<h3>{}</h3>", escape(&system.colors_heading));
        out.push_str("<ul class=\"swatches\">");
        for swatch in &system.system.colors {
            let _ = write!(
                out,
                "<li><span class=\"swatch\" style=\"background: {0}\"></span>{1} <code>{0}</code></li>",
                escape(&swatch.hex),
                escape(&swatch.name)
            );
        }
        out.push_str("</ul>\n");
        let _ = writeln!(out, "<h3>{}</h3>", escape(&system.typography_heading));
        out.push_str("<ul class=\"typography\">");
        for entry in &system.system.typography {
            let _ = write!(
                out,
                "<li><strong>{}</strong> {}</li>",
                escape(&entry.name),
                escape(&entry.usage)
            );
        }
        out.push_str("</ul>\n</section>\n");
    }

    if let Some(prototype) = &study.prototype {
        out.push_str("<section class=\"cs-prototype\">\n");
        let _ = writeln!(out, "<h2>{}</h2>", escape(&prototype.heading));
        let _ = writeln!(
            out,
            "<iframe class=\"prototype-frame\" src=\"{}\" title=\"{}\" loading=\"lazy\" allowfullscreen></iframe>",
            escape(&prototype.embed_url),
            escape(&study.title)
        );
        let _ = writeln!(out, "<p class=\"hint\">{}</p>", escape(&prototype.hint));
        let _ = writeln!(
            out,
            "<a class=\"prototype-link\" href=\"{}\" rel=\"noopener\" target=\"_blank\">{}</a>",
            escape(&prototype.url),
            escape(&prototype.link_label)
        );
        out.push_str("</section>\n");
    }

    if !study.metrics.is_empty() {
        out.push_str("<section class=\"cs-metrics\">\n");
        let _ = writeln!(out, "<h2>{}</h2>", escape(&headings.metrics));
        for metric in &study.metrics {
            let _ = writeln!(
                out,
                "<div class=\"metric\"><strong>{}</strong><span>{}</span></div>",
                escape(&metric.value),
                escape(&metric.label)
            );
        }
        out.push_str("</section>\n");
    }

    let _ = writeln!(
        out,
        "<section class=\"cs-outcome\"><h2>{}</h2><p>{}</p></section>",
        escape(&headings.outcome),
        escape(&study.results)
    );

    if !study.next_steps.is_empty() {
        out.push_str("<section class=\"cs-next-steps\">\n");
        let _ = writeln!(out, "<h2>{}</h2>", escape(&headings.next_steps));
        out.push_str(&list("next-steps", &study.next_steps));
        out.push_str("</section>\n");
    }

    out.push_str("</article>\n");
    out
}

/// Renders the home page, with the overlay when one is open.
#[must_use]
pub fn render_home(view: &HomeView) -> String {
    let mut body = String::new();

    let mut nav = String::from("<nav class=\"site-nav\">");
    for item in &view.nav {
        let _ = write!(
            nav,
            "<a href=\"#{}\">{}</a>",
            item.anchor,
            escape(&item.label)
        );
    }
    nav.push_str("</nav>\n");
    let brand_href = format!("/?lang={}", view.language.code());
    body.push_str(&header(
        &brand_href,
        &view.hero.name,
        &nav,
        &language_switcher(&view.languages),
    ));

    body.push_str("<main>\n");

    let hero = &view.hero;
    body.push_str("<section class=\"hero\">\n");
    let _ = writeln!(body, "<span class=\"status\">{}</span>", escape(&hero.status));
    let _ = writeln!(
        body,
        "<h1>{}<br>{}</h1>",
        escape(&hero.title_prefix),
        escape(&hero.title_suffix)
    );
    let _ = writeln!(body, "<p class=\"intro\">{}</p>", escape(&hero.intro));
    let _ = writeln!(body, "<a class=\"cta\" href=\"#work\">{}</a>", escape(&hero.cta));
    body.push_str(&image(&hero.photo, "portrait"));
    body.push('\n');
    let _ = writeln!(body, "<span class=\"specialty\">{}</span>", escape(&hero.specialty));
    body.push_str("</section>\n");

    body.push_str("<section id=\"work\" class=\"gallery\">\n");
    let _ = writeln!(body, "<h2>{}</h2>", escape(&view.work_heading));
    for card in &view.projects {
        let _ = writeln!(
            body,
            "<a class=\"project-card\" href=\"{}\" data-project=\"{}\" style=\"--accent: {}\">",
            escape(&card.href),
            escape(&card.id),
            escape(&card.accent_color)
        );
        body.push_str(&image(&card.thumbnail, "thumbnail"));
        body.push('\n');
        let _ = writeln!(body, "<p class=\"category\">{}</p>", escape(&card.category));
        let _ = writeln!(body, "<h3>{}</h3>", escape(&card.title));
        let _ = writeln!(body, "<p class=\"description\">{}</p>", escape(&card.description));
        body.push_str(&list("tags", &card.tags));
        body.push_str("</a>\n");
    }
    body.push_str("</section>\n");

    let about = &view.about;
    body.push_str("<section id=\"about\" class=\"about\">\n");
    let _ = writeln!(body, "<h2>{}</h2>", escape(&about.heading));
    let _ = writeln!(body, "<p class=\"bio\">{}</p>", escape(&about.bio));
    let _ = writeln!(
        body,
        "<div class=\"tile experience\"><h3>{}</h3><strong>{}</strong><p>{}</p></div>",
        escape(&about.experience_title),
        escape(&about.experience_role),
        escape(&about.experience_description)
    );
    let _ = write!(
        body,
        "<div class=\"tile skills\"><h3>{}</h3>",
        escape(&about.skills_heading)
    );
    for skill in &about.skills {
        let _ = write!(
            body,
            "<div class=\"skill\"><span>{}</span><meter min=\"0\" max=\"100\" value=\"{}\"></meter></div>",
            escape(&skill.name),
            skill.level
        );
    }
    body.push_str("</div>\n");
    let _ = write!(
        body,
        "<div class=\"tile languages\"><h3>{}</h3><ul>",
        escape(&about.languages_heading)
    );
    for spoken in &about.languages {
        let _ = write!(
            body,
            "<li>{} <span>{}</span></li>",
            escape(&spoken.name),
            escape(&spoken.level)
        );
    }
    body.push_str("</ul></div>\n");
    let _ = write!(
        body,
        "<div class=\"tile interests\"><h3>{}</h3>",
        escape(&about.interests_heading)
    );
    body.push_str(&list("interests", &about.interests));
    body.push_str("</div>\n</section>\n");

    body.push_str("</main>\n");
    body.push_str(&contact_footer(&view.contact));

    if let Some(modal) = &view.modal {
        let _ = writeln!(
            body,
            "<div class=\"modal-backdrop\" role=\"dialog\" aria-modal=\"true\" aria-label=\"{}\" data-close-href=\"{}\">",
            escape(&modal.case_study.title),
            escape(&modal.close_href)
        );
        let _ = writeln!(
            body,
            "<a class=\"modal-close\" href=\"{}\">{}</a>",
            escape(&modal.close_href),
            escape(&modal.case_study.headings.close)
        );
        body.push_str("<div class=\"modal-panel\">\n");
        body.push_str(&case_study_body(&modal.case_study));
        body.push_str("</div>\n</div>\n");
    }

    let title = format!("{} | {}", view.hero.name, branding::SITE_TITLE);
    let body_class = if view.scrollable {
        ""
    } else {
        SCROLL_LOCKED_CLASS
    };
    document(view.language, &title, body_class, &body)
}

fn project_link(class: &str, link: &ProjectLink) -> String {
    format!(
        "<a class=\"{class}\" href=\"{}\"><span>{}</span><strong>{}</strong></a>\n",
        escape(&link.href),
        escape(&link.label),
        escape(&link.title)
    )
}

/// Renders the routed case-study page.
#[must_use]
pub fn render_project_page(view: &ProjectPageView) -> String {
    let mut body = String::new();

    body.push_str("<div class=\"progress-bar\" aria-hidden=\"true\"></div>\n");
    let back = format!(
        "<a class=\"back-link\" href=\"{}\">{}</a>\n",
        escape(&view.home_href),
        escape(&view.back_label)
    );
    body.push_str(&header(
        &view.home_href,
        branding::SITE_TITLE,
        &back,
        &language_switcher(&view.languages),
    ));

    body.push_str("<main class=\"case-study-page\">\n");
    body.push_str(&case_study_body(&view.case_study));

    if view.previous.is_some() || view.next.is_some() {
        body.push_str("<nav class=\"project-nav\">\n");
        if let Some(previous) = &view.previous {
            body.push_str(&project_link("previous", previous));
        }
        if let Some(next) = &view.next {
            body.push_str(&project_link("next", next));
        }
        body.push_str("</nav>\n");
    }
    body.push_str("</main>\n");

    body.push_str(&contact_footer(&view.contact));
    let _ = writeln!(
        body,
        "<button class=\"scroll-top\" type=\"button\" aria-label=\"{0}\">{0}</button>",
        escape(&view.scroll_top)
    );

    let title = format!("{} | {}", view.case_study.title, branding::SITE_TITLE);
    document(view.language, &title, "", &body)
}

/// Renders the not-found page.
#[must_use]
pub fn render_not_found(view: &NotFoundView) -> String {
    let mut body = String::new();
    body.push_str(&header(
        &view.back_href,
        branding::SITE_TITLE,
        "",
        &language_switcher(&view.languages),
    ));
    body.push_str("<main class=\"not-found\">\n");
    body.push_str("<p class=\"code\">404</p>\n");
    let _ = writeln!(body, "<h1>{}</h1>", escape(&view.title));
    let _ = writeln!(body, "<p>{}</p>", escape(&view.message));
    let _ = writeln!(
        body,
        "<a class=\"back-link\" href=\"{}\">{}</a>",
        escape(&view.back_href),
        escape(&view.back_label)
    );
    body.push_str("</main>\n");

    let title = format!("{} | {}", view.title, branding::SITE_TITLE);
    document(view.language, &title, "", &body)
}
