//! Implements RenderPort with maud. All interpolated text is escaped.

use crate::domain::{Block, Icon, ImageHint, PageMetadata, Slot};
use crate::ports::{DocumentPort, RenderPort};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Feather "map" icon, 32px.
const MAP_ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><polygon points="1 6 1 22 8 18 16 22 23 18 23 2 16 6 8 2 1 6"></polygon><line x1="8" y1="2" x2="8" y2="18"></line><line x1="16" y1="6" x2="16" y2="22"></line></svg>"#;

/// HTML host. `image_quality` is forwarded to the image service as `q=`.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    product_name: String,
    image_quality: Option<u8>,
}

impl HtmlRenderer {
    pub fn new(product_name: impl Into<String>, image_quality: Option<u8>) -> Self {
        Self {
            product_name: product_name.into(),
            image_quality,
        }
    }

    fn image_src(&self, src: &str) -> String {
        match self.image_quality {
            Some(q) => {
                let sep = if src.contains('?') { '&' } else { '?' };
                format!("{src}{sep}q={q}")
            }
            None => src.to_string(),
        }
    }
}

impl RenderPort for HtmlRenderer {
    type Node = Markup;

    fn text(&self, slot: Slot, content: &str) -> Markup {
        let class = slot.class();
        match slot {
            Slot::HeaderText => html! { h1 class=(class) { (content) } },
            Slot::PlaceName => html! { h2 class=(class) { (content) } },
            Slot::SectionTitle => html! { h3 class=(class) { (content) } },
            Slot::StackName => html! { h4 class=(class) { (content) } },
            Slot::Date => html! { time class=(class) { (content) } },
            Slot::OpenPositionsText | Slot::AnnualAverageSalaryText => {
                html! { span class=(class) { (content) } }
            }
            _ => html! { p class=(class) { (content) } },
        }
    }

    fn block(&self, block: Block, children: Vec<Markup>) -> Markup {
        let class = block.class();
        match block {
            Block::Page => html! { div class=(class) { @for c in children { (c) } } },
            Block::Header => html! { header class=(class) { @for c in children { (c) } } },
            Block::Content => html! { main class=(class) { @for c in children { (c) } } },
            Block::StackCard => html! { article class=(class) { @for c in children { (c) } } },
            Block::Gallery => html! { section class=(class) { @for c in children { (c) } } },
            Block::Figure => html! { figure class=(class) { @for c in children { (c) } } },
            Block::ImageCaption => {
                html! { figcaption class=(class) { @for c in children { (c) } } }
            }
            _ => html! { div class=(class) { @for c in children { (c) } } },
        }
    }

    fn container(&self, children: Vec<Markup>) -> Markup {
        html! { div class="container" { @for c in children { (c) } } }
    }

    fn link(&self, href: &str, aria_label: Option<&str>, children: Vec<Markup>) -> Markup {
        html! { a href=(href) aria-label=[aria_label] { @for c in children { (c) } } }
    }

    fn image(&self, hint: &ImageHint) -> Markup {
        html! {
            img src=(self.image_src(&hint.src)) alt=(hint.alt)
                width=(hint.width) height=(hint.height)
                loading="lazy" decoding="async";
        }
    }

    fn icon(&self, icon: Icon) -> Markup {
        match icon {
            Icon::Map => PreEscaped(MAP_ICON_SVG.to_string()),
        }
    }

    fn logo(&self) -> Markup {
        html! { span class="logo" role="img" aria-label=(self.product_name) { (self.product_name) } }
    }
}

impl DocumentPort for HtmlRenderer {
    fn document(&self, lang: &str, metadata: &PageMetadata, body: Markup) -> String {
        document(lang, metadata, body).into_string()
    }
}

/// Full HTML5 document: metadata injected into `<head>`, `body` as the page.
pub fn document(lang: &str, metadata: &PageMetadata, body: Markup) -> Markup {
    let og = &metadata.open_graph;
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (metadata.title) }
                meta name="description" content=(metadata.description);
                link rel="canonical" href=(metadata.canonical_url);
                meta property="og:url" content=(og.url);
                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                @if let Some(img) = &og.image {
                    meta property="og:image" content=(img.url);
                    meta property="og:image:width" content=(img.width);
                    meta property="og:image:height" content=(img.height);
                    meta property="og:image:alt" content=(img.alt);
                }
            }
            body {
                (body)
            }
        }
    }
}
