use std::collections::HashMap;

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::NodeRef;

/// Named anchors on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Overview,
    Problems,
    Features,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::Problems,
        Section::Features,
        Section::Contact,
    ];

    /// Label used in the top navigation tabs.
    pub fn tab_label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Problems => "Problem & Solutions",
            Section::Features => "Features",
            Section::Contact => "Launch",
        }
    }

    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Problems => "problems",
            Section::Features => "features",
            Section::Contact => "contact",
        }
    }
}

/// Something the viewport can be smoothly scrolled to.
pub trait ScrollTarget {
    /// Starts the scroll. Returns false when there is nothing mounted to
    /// scroll to.
    fn scroll_into_view(&self) -> bool;
}

impl ScrollTarget for NodeRef {
    fn scroll_into_view(&self) -> bool {
        match self.cast::<Element>() {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

/// Registry of scroll handles keyed by section.
#[derive(Clone)]
pub struct SectionTargets<T> {
    targets: HashMap<Section, T>,
}

impl<T> Default for SectionTargets<T> {
    fn default() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }
}

impl<T: ScrollTarget> SectionTargets<T> {
    pub fn register(&mut self, section: Section, target: T) {
        self.targets.insert(section, target);
    }

    #[cfg(test)]
    pub fn get(&self, section: Section) -> Option<&T> {
        self.targets.get(&section)
    }

    /// Unknown or unmounted sections are ignored.
    pub fn scroll_to(&self, section: Section) -> bool {
        self.targets
            .get(&section)
            .map(|target| target.scroll_into_view())
            .unwrap_or(false)
    }
}

impl<T: ScrollTarget> FromIterator<(Section, T)> for SectionTargets<T> {
    fn from_iter<I: IntoIterator<Item = (Section, T)>>(iter: I) -> Self {
        let mut targets = Self::default();
        for (section, target) in iter {
            targets.register(section, target);
        }
        targets
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in anchor that counts scroll requests.
    #[derive(Clone, Default)]
    pub(crate) struct FakeAnchor {
        pub mounted: bool,
        pub scrolls: Rc<Cell<usize>>,
    }

    impl FakeAnchor {
        pub fn mounted() -> Self {
            Self {
                mounted: true,
                ..Default::default()
            }
        }
    }

    impl ScrollTarget for FakeAnchor {
        fn scroll_into_view(&self) -> bool {
            if self.mounted {
                self.scrolls.set(self.scrolls.get() + 1);
            }
            self.mounted
        }
    }

    #[test]
    fn scrolls_only_the_requested_section() {
        let targets: SectionTargets<FakeAnchor> = Section::ALL
            .into_iter()
            .map(|section| (section, FakeAnchor::mounted()))
            .collect();

        assert!(targets.scroll_to(Section::Features));
        for section in Section::ALL {
            let expected = usize::from(section == Section::Features);
            assert_eq!(targets.get(section).map(|t| t.scrolls.get()), Some(expected));
        }
    }

    #[test]
    fn unmounted_anchor_is_a_no_op() {
        let mut targets = SectionTargets::default();
        targets.register(Section::Problems, FakeAnchor::default());

        assert!(!targets.scroll_to(Section::Problems));
        assert!(!targets.scroll_to(Section::Contact));
    }

    #[test]
    fn unmounted_node_ref_does_not_scroll() {
        let mut targets = SectionTargets::default();
        targets.register(Section::Overview, NodeRef::default());

        assert!(!targets.scroll_to(Section::Overview));
    }
}
