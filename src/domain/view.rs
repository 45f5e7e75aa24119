//! Host-independent render tree and the visual roles a Place page is made of.
//!
//! `Slot` is a text role, `Block` a grouping role. Both carry a stable CSS
//! class so any host can style them.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slot {
    HeaderText,
    Date,
    PlaceName,
    PlaceDescription,
    SectionTitle,
    SectionContent,
    StackName,
    OpenPositionsText,
    OpenPositionsValue,
    AnnualAverageSalaryText,
    AnnualAverageSalaryValue,
    ImageDescription,
}

impl Slot {
    pub fn class(self) -> &'static str {
        match self {
            Slot::HeaderText => "header-text",
            Slot::Date => "date",
            Slot::PlaceName => "place-name",
            Slot::PlaceDescription => "place-description",
            Slot::SectionTitle => "section-title",
            Slot::SectionContent => "section-content",
            Slot::StackName => "stack-name",
            Slot::OpenPositionsText => "open-positions-text",
            Slot::OpenPositionsValue => "open-positions-value",
            Slot::AnnualAverageSalaryText => "annual-average-salary-text",
            Slot::AnnualAverageSalaryValue => "annual-average-salary-value",
            Slot::ImageDescription => "image-description",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Block {
    Page,
    Header,
    HeaderLogo,
    Content,
    Body,
    StackCard,
    OpenPositions,
    AnnualAverageSalary,
    Gallery,
    Figure,
    ImageCaption,
}

impl Block {
    pub fn class(self) -> &'static str {
        match self {
            Block::Page => "place",
            Block::Header => "place-header",
            Block::HeaderLogo => "header-logo",
            Block::Content => "place-content",
            Block::Body => "place-body",
            Block::StackCard => "stack-card",
            Block::OpenPositions => "open-positions",
            Block::AnnualAverageSalary => "annual-average-salary",
            Block::Gallery => "gallery",
            Block::Figure => "gallery-image",
            Block::ImageCaption => "image-caption",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    Map,
}

/// Image plus the layout hints needed to reserve its space before load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageHint {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Text {
        slot: Slot,
        content: String,
    },
    Block {
        block: Block,
        children: Vec<Node>,
    },
    Container {
        children: Vec<Node>,
    },
    Link {
        href: String,
        aria_label: Option<String>,
        children: Vec<Node>,
    },
    Image(ImageHint),
    Icon {
        icon: Icon,
    },
    Logo,
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Block { children, .. }
            | Node::Container { children }
            | Node::Link { children, .. } => children,
            _ => &[],
        }
    }

    /// Pre-order traversal.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    /// Text contents filling `slot`, in document order.
    pub fn texts_in(&self, slot: Slot) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let Node::Text { slot: s, content } = n {
                if *s == slot {
                    out.push(content.as_str());
                }
            }
        });
        out
    }

    pub fn blocks(&self, block: Block) -> Vec<&Node> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if matches!(n, Node::Block { block: b, .. } if *b == block) {
                out.push(n);
            }
        });
        out
    }

    pub fn images(&self) -> Vec<&ImageHint> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let Node::Image(hint) = n {
                out.push(hint);
            }
        });
        out
    }

    pub fn links(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let Node::Link { href, .. } = n {
                out.push(href.as_str());
            }
        });
        out
    }

    /// All text in document order, regardless of slot.
    pub fn text_sequence(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let Node::Text { content, .. } = n {
                out.push(content.as_str());
            }
        });
        out
    }
}
