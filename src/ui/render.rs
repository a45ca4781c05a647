//! Plain-text projection of the view model.
//!
//! Used by the preview binary to show what a page embedding the core would
//! paint: heading, visible cards, pagination hints, and overlay state. The
//! output is line-oriented text, one card per block, suitable for eyeballing
//! filter behavior from a terminal.

use super::viewmodel::{PortfolioViewModel, ViewerViewModel};
use crate::app::modes::OverlayPhase;

/// Renders the view model to a plain-text listing.
#[must_use]
pub fn render_text(vm: &PortfolioViewModel) -> String {
    let mut out = String::new();

    out.push_str(&format!("== {} ==\n", vm.heading));

    if let Some(empty) = &vm.empty_state {
        out.push_str(&format!("\n{}\n{}\n", empty.message, empty.subtitle));
        return out;
    }

    for card in &vm.cards {
        out.push('\n');
        out.push_str(&format!("{}\n", card.title));
        out.push_str(&format!("{} \u{2022} {}\n", card.publication, card.display_date));
        out.push_str(&format!("{}\n", card.summary));
        out.push_str(&format!("read more -> {}\n", card.document_url));
    }

    if vm.pagination.visible {
        out.push('\n');
        if vm.pagination.show_more {
            out.push_str("[show more] ");
        }
        if vm.pagination.show_less {
            out.push_str("[show less]");
        }
        out.push('\n');
    }

    if let Some(viewer) = visible_viewer(&vm.viewer_overlay) {
        out.push_str(&format!("\nviewer: {} ({})\n", viewer.title, viewer.url));
    }

    out
}

fn visible_viewer(viewer: &ViewerViewModel) -> Option<&ViewerViewModel> {
    (viewer.phase == OverlayPhase::Visible).then_some(viewer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{
        CardViewModel, EmptyState, FilterPanelViewModel, OverlayViewModel, PaginationViewModel,
        PortfolioViewModel,
    };

    fn base_vm() -> PortfolioViewModel {
        PortfolioViewModel {
            heading: "All Work".to_string(),
            cards: vec![],
            empty_state: None,
            pagination: PaginationViewModel {
                visible: false,
                show_more: false,
                show_less: false,
            },
            filter_panel: FilterPanelViewModel {
                open: false,
                topics: vec![],
                genres: vec![],
                apply_visible: false,
            },
            active_filters_banner: false,
            info_overlay: OverlayViewModel {
                phase: OverlayPhase::Hidden,
            },
            viewer_overlay: ViewerViewModel {
                phase: OverlayPhase::Hidden,
                url: String::new(),
                title: String::new(),
            },
        }
    }

    #[test]
    fn empty_state_replaces_the_grid() {
        let mut vm = base_vm();
        vm.empty_state = Some(EmptyState {
            message: "No matching work".to_string(),
            subtitle: "Try clearing a filter".to_string(),
        });
        let text = render_text(&vm);
        assert!(text.contains("No matching work"));
        assert!(!text.contains("read more"));
    }

    #[test]
    fn cards_render_publication_and_date_line() {
        let mut vm = base_vm();
        vm.cards.push(CardViewModel {
            id: "a1".to_string(),
            title: "A Story".to_string(),
            summary: "Summary.".to_string(),
            publication: "The Ledger".to_string(),
            display_date: "March 2024".to_string(),
            image_url: "assets/images/a1.png".to_string(),
            fallback_image_url: "placeholder.png".to_string(),
            document_url: "assets/pdfs/a1.pdf".to_string(),
        });
        let text = render_text(&vm);
        assert!(text.contains("The Ledger \u{2022} March 2024"));
        assert!(text.contains("read more -> assets/pdfs/a1.pdf"));
    }
}
