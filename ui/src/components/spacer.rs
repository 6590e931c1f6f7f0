use dioxus::prelude::*;

/// Which directions a [`Spacer`] occupies. The other direction collapses to 1px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Both,
    Horizontal,
    Vertical,
}

impl Axis {
    /// `(width, height)` in px for a spacer of `size`.
    pub fn extent(self, size: u32) -> (u32, u32) {
        match self {
            Axis::Both => (size, size),
            Axis::Horizontal => (size, 1),
            Axis::Vertical => (1, size),
        }
    }
}

#[component]
pub fn Spacer(size: u32, #[props(default)] axis: Axis) -> Element {
    let (width, height) = axis.extent(size);
    rsx! {
        span {
            class: "spacer",
            style: "display: block; width: {width}px; min-width: {width}px; height: {height}px; min-height: {height}px;",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_collapses_cross_axis() {
        assert_eq!(Axis::Both.extent(12), (12, 12));
        assert_eq!(Axis::Horizontal.extent(12), (12, 1));
        assert_eq!(Axis::Vertical.extent(12), (1, 12));
    }
}
