//! Place page view: validated `PlaceData` -> render tree + page metadata.
//!
//! Pure. Every primitive goes through the injected `RenderPort`.

use crate::domain::{
    Block, GalleryImage, Icon, ImageHint, NavigationState, PageMetadata, PlaceData, Slot, Stack,
};
use crate::ports::RenderPort;
use crate::usecases::seo::{SeoSettings, page_metadata};
use tracing::debug;

pub const POPULATION_TITLE: &str = "População";
pub const AVERAGE_SALARY_TITLE: &str = "MÉDIA SALARIAL";
pub const OPPORTUNITIES_TITLE: &str = "OPORTUNIDADES";
pub const OPEN_POSITIONS_TEXT: &str = "VAGAS ABERTAS";
pub const ANNUAL_AVERAGE_SALARY_TEXT: &str = "SALÁRIO MÉDIO ANUAL";
pub const GALLERY_TITLE: &str = "GALERIA";

/// Link target of the header map icon.
pub const HOME_HREF: &str = "/";
const HOME_ARIA_LABEL: &str = "about";

/// Rendered page: body tree for the host plus metadata for the document head.
#[derive(Debug, Clone)]
pub struct PlacePage<N> {
    pub metadata: PageMetadata,
    pub body: N,
}

pub struct PlaceView {
    seo: SeoSettings,
}

impl PlaceView {
    pub fn new(seo: SeoSettings) -> Self {
        Self { seo }
    }

    /// Returns `None` while navigation is still resolving this page's data.
    pub fn render<R: RenderPort>(
        &self,
        place: &PlaceData,
        nav: NavigationState,
        r: &R,
    ) -> Option<PlacePage<R::Node>> {
        if nav.is_resolving() {
            debug!(name = %place.name, "navigation resolving, skipping render");
            return None;
        }

        let header = r.container(vec![r.block(
            Block::Header,
            vec![
                r.block(Block::HeaderLogo, vec![r.logo()]),
                r.text(Slot::HeaderText, place.short_label()),
                r.link(HOME_HREF, Some(HOME_ARIA_LABEL), vec![r.icon(Icon::Map)]),
            ],
        )]);

        let mut body = vec![
            r.text(Slot::Date, &place.date),
            r.text(Slot::PlaceName, &place.name),
            r.text(Slot::PlaceDescription, &place.description),
            r.text(Slot::SectionTitle, POPULATION_TITLE),
            r.text(Slot::SectionContent, &place.population),
            r.text(Slot::SectionTitle, AVERAGE_SALARY_TITLE),
            r.text(Slot::SectionContent, &place.average_salary),
            r.text(Slot::SectionTitle, OPPORTUNITIES_TITLE),
        ];
        body.extend(place.stacks.iter().map(|s| stack_card(r, s)));
        body.push(r.text(Slot::SectionTitle, GALLERY_TITLE));
        body.push(r.block(
            Block::Gallery,
            place.gallery.iter().map(|img| figure(r, img)).collect(),
        ));

        let content = r.block(
            Block::Content,
            vec![r.block(Block::Body, vec![r.container(body)])],
        );

        Some(PlacePage {
            metadata: page_metadata(place, &self.seo),
            body: r.block(Block::Page, vec![header, content]),
        })
    }
}

fn stack_card<R: RenderPort>(r: &R, stack: &Stack) -> R::Node {
    r.block(
        Block::StackCard,
        vec![
            r.text(Slot::StackName, &stack.name),
            r.block(
                Block::OpenPositions,
                vec![
                    r.text(Slot::OpenPositionsText, OPEN_POSITIONS_TEXT),
                    r.text(Slot::OpenPositionsValue, &stack.open_positions),
                ],
            ),
            r.block(
                Block::AnnualAverageSalary,
                vec![
                    r.text(Slot::AnnualAverageSalaryText, ANNUAL_AVERAGE_SALARY_TEXT),
                    r.text(Slot::AnnualAverageSalaryValue, &stack.annual_average_salary),
                ],
            ),
        ],
    )
}

fn figure<R: RenderPort>(r: &R, img: &GalleryImage) -> R::Node {
    let hint = ImageHint {
        src: img.url.clone(),
        alt: img.description.clone(),
        width: img.width,
        height: img.height,
    };
    r.block(
        Block::Figure,
        vec![
            r.image(&hint),
            r.block(
                Block::ImageCaption,
                vec![r.text(Slot::ImageDescription, &img.description)],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::render::TreeRenderer;
    use crate::domain::Node;

    fn springfield() -> PlaceData {
        PlaceData {
            date: "01/05/2021".to_string(),
            name: "Springfield, USA".to_string(),
            description: "A town by the river".to_string(),
            population: "30,000".to_string(),
            average_salary: "$45k".to_string(),
            stacks: vec![Stack {
                name: "Frontend".to_string(),
                open_positions: "5".to_string(),
                annual_average_salary: "$70k".to_string(),
            }],
            gallery: vec![GalleryImage {
                url: "/a.jpg".to_string(),
                width: 800,
                height: 600,
                description: "Downtown".to_string(),
            }],
        }
    }

    fn render(place: &PlaceData) -> PlacePage<Node> {
        PlaceView::new(SeoSettings::default())
            .render(place, NavigationState::Resolved, &TreeRenderer)
            .unwrap()
    }

    #[test]
    fn test_springfield_example() {
        let page = render(&springfield());
        let body = &page.body;

        assert_eq!(body.texts_in(Slot::HeaderText), vec!["Springfield"]);
        assert_eq!(body.blocks(Block::StackCard).len(), 1);
        assert_eq!(body.texts_in(Slot::StackName), vec!["Frontend"]);
        assert_eq!(body.texts_in(Slot::OpenPositionsValue), vec!["5"]);
        assert_eq!(body.texts_in(Slot::AnnualAverageSalaryValue), vec!["$70k"]);
        assert_eq!(body.texts_in(Slot::ImageDescription), vec!["Downtown"]);

        let images = body.images();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, "/a.jpg");
        assert_eq!((images[0].width, images[0].height), (800, 600));
        assert_eq!(images[0].alt, "Downtown");
    }

    #[test]
    fn test_label_without_comma_is_full_name() {
        let mut place = springfield();
        place.name = "Lisboa".to_string();
        let page = render(&place);
        assert_eq!(page.body.texts_in(Slot::HeaderText), vec!["Lisboa"]);
        assert_eq!(page.body.texts_in(Slot::PlaceName), vec!["Lisboa"]);
    }

    #[test]
    fn test_header_has_logo_and_home_link() {
        let page = render(&springfield());
        let header = page.body.blocks(Block::Header);
        assert_eq!(header.len(), 1);
        assert_eq!(header[0].links(), vec![HOME_HREF]);

        let mut logos = 0;
        header[0].walk(&mut |n| {
            if matches!(n, Node::Logo) {
                logos += 1;
            }
        });
        assert_eq!(logos, 1);
    }

    #[test]
    fn test_body_order_is_fixed() {
        let page = render(&springfield());
        let body = page.body.blocks(Block::Body)[0];
        let seq = body.text_sequence();
        assert_eq!(
            &seq[..8],
            &[
                "01/05/2021",
                "Springfield, USA",
                "A town by the river",
                POPULATION_TITLE,
                "30,000",
                AVERAGE_SALARY_TITLE,
                "$45k",
                OPPORTUNITIES_TITLE,
            ]
        );
        assert_eq!(
            body.texts_in(Slot::SectionTitle),
            vec![
                POPULATION_TITLE,
                AVERAGE_SALARY_TITLE,
                OPPORTUNITIES_TITLE,
                GALLERY_TITLE
            ]
        );
    }

    #[test]
    fn test_collections_keep_input_order() {
        let mut place = springfield();
        place.stacks = ["Go", "Rust", "Elixir"]
            .iter()
            .enumerate()
            .map(|(i, name)| Stack {
                name: name.to_string(),
                open_positions: i.to_string(),
                annual_average_salary: format!("${}0k", i + 6),
            })
            .collect();
        place.gallery = ["/1.jpg", "/2.jpg"]
            .iter()
            .map(|url| GalleryImage {
                url: url.to_string(),
                width: 100,
                height: 50,
                description: format!("caption {url}"),
            })
            .collect();

        let page = render(&place);
        assert_eq!(page.body.blocks(Block::StackCard).len(), 3);
        assert_eq!(page.body.texts_in(Slot::StackName), vec!["Go", "Rust", "Elixir"]);
        assert_eq!(page.body.texts_in(Slot::OpenPositionsValue), vec!["0", "1", "2"]);
        assert_eq!(
            page.body.texts_in(Slot::AnnualAverageSalaryValue),
            vec!["$60k", "$70k", "$80k"]
        );
        assert_eq!(
            page.body.texts_in(Slot::ImageDescription),
            vec!["caption /1.jpg", "caption /2.jpg"]
        );
        assert_eq!(page.body.blocks(Block::Figure).len(), 2);
    }

    #[test]
    fn test_empty_collections_render_headings_only() {
        let mut place = springfield();
        place.stacks.clear();
        place.gallery.clear();
        let page = render(&place);

        assert!(page.body.blocks(Block::StackCard).is_empty());
        assert!(page.body.images().is_empty());
        assert_eq!(page.body.blocks(Block::Gallery).len(), 1);
        let titles = page.body.texts_in(Slot::SectionTitle);
        assert!(titles.contains(&OPPORTUNITIES_TITLE));
        assert!(titles.contains(&GALLERY_TITLE));
        assert!(page.metadata.open_graph.image.is_none());
    }

    #[test]
    fn test_resolving_renders_nothing() {
        let view = PlaceView::new(SeoSettings::default());
        let out = view.render(&springfield(), NavigationState::Resolving, &TreeRenderer);
        assert!(out.is_none());

        let mut empty = springfield();
        empty.stacks.clear();
        empty.gallery.clear();
        assert!(
            view.render(&empty, NavigationState::Resolving, &TreeRenderer)
                .is_none()
        );
    }

    #[test]
    fn test_metadata_travels_with_body() {
        let page = render(&springfield());
        assert_eq!(page.metadata.title, "Springfield, USA | Workout");
        assert_eq!(
            page.metadata.open_graph.image.as_ref().map(|i| i.url.as_str()),
            Some("/a.jpg")
        );
    }
}
