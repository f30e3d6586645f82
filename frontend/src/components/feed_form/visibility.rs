//! Pure resolution of the send-mode settings panels.
//!
//! The form has three mutually-exclusive send-mode checkboxes (embed, text,
//! link), each with a settings panel underneath it. The functions here decide
//! which panels to show or hide; `helpers::apply_panel_visibility` applies the
//! verdict to the DOM. Keeping the decision separate from the DOM lets the
//! whole rule set be unit-tested on the host target.

/// Which send-mode checkbox fired a change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMode {
    Embed,
    Text,
    Link,
}

/// Checked state of the three send-mode checkboxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendModeChecks {
    pub embed: bool,
    pub text: bool,
    pub link: bool,
}

/// Per-panel verdict. `None` leaves the panel's current display untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelVisibility {
    pub embed: Option<bool>,
    pub text: Option<bool>,
    pub link: Option<bool>,
}

/// Resolves the panels once, when the page has finished loading.
///
/// Priority order, first match wins: embed beats link. The text panel is
/// never toggled here; its visibility is left to the markup default.
pub fn resolve_on_load(checks: SendModeChecks) -> PanelVisibility {
    if checks.embed {
        PanelVisibility {
            embed: Some(true),
            text: None,
            link: Some(false),
        }
    } else if checks.link {
        PanelVisibility {
            embed: Some(false),
            text: None,
            link: Some(true),
        }
    } else {
        PanelVisibility {
            embed: Some(false),
            text: None,
            link: Some(false),
        }
    }
}

/// Resolves the panels after one checkbox changed state.
///
/// Unchecking a box has no effect; only checking one moves panels. Checking
/// "send as text" hides the other two panels but does not reveal a text
/// panel of its own.
pub fn resolve_on_toggle(toggled: SendMode, checks: SendModeChecks) -> PanelVisibility {
    match toggled {
        SendMode::Embed if checks.embed => PanelVisibility {
            embed: Some(true),
            text: None,
            link: Some(false),
        },
        SendMode::Text if checks.text => PanelVisibility {
            embed: Some(false),
            text: None,
            link: Some(false),
        },
        SendMode::Link if checks.link => PanelVisibility {
            embed: Some(false),
            text: None,
            link: Some(true),
        },
        _ => PanelVisibility::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Display state of the three panels, as the DOM would hold it.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    struct Panels {
        embed: bool,
        text: bool,
        link: bool,
    }

    impl Panels {
        fn apply(mut self, visibility: PanelVisibility) -> Self {
            if let Some(embed) = visibility.embed {
                self.embed = embed;
            }
            if let Some(text) = visibility.text {
                self.text = text;
            }
            if let Some(link) = visibility.link {
                self.link = link;
            }
            self
        }
    }

    fn checks(embed: bool, text: bool, link: bool) -> SendModeChecks {
        SendModeChecks { embed, text, link }
    }

    #[test]
    fn load_with_embed_checked_shows_embed_panel() {
        let panels = Panels::default().apply(resolve_on_load(checks(true, false, false)));
        assert!(panels.embed);
        assert!(!panels.link);
    }

    #[test]
    fn load_with_link_checked_shows_link_panel() {
        let panels = Panels::default().apply(resolve_on_load(checks(false, false, true)));
        assert!(panels.link);
        assert!(!panels.embed);
    }

    #[test]
    fn load_with_nothing_checked_hides_both_panels() {
        let panels = Panels {
            embed: true,
            text: false,
            link: true,
        }
        .apply(resolve_on_load(checks(false, false, false)));
        assert!(!panels.embed);
        assert!(!panels.link);
    }

    #[test]
    fn load_priority_embed_beats_link() {
        let verdict = resolve_on_load(checks(true, false, true));
        assert_eq!(verdict.embed, Some(true));
        assert_eq!(verdict.link, Some(false));
    }

    #[test]
    fn load_never_touches_text_panel() {
        for embed in [false, true] {
            for link in [false, true] {
                assert_eq!(resolve_on_load(checks(embed, false, link)).text, None);
            }
        }
    }

    #[test]
    fn checking_embed_shows_embed_and_hides_link() {
        let panels = Panels {
            embed: false,
            text: false,
            link: true,
        }
        .apply(resolve_on_toggle(SendMode::Embed, checks(true, false, false)));
        assert!(panels.embed);
        assert!(!panels.link);
    }

    #[test]
    fn checking_link_shows_link_and_hides_embed() {
        let panels = Panels {
            embed: true,
            text: false,
            link: false,
        }
        .apply(resolve_on_toggle(SendMode::Link, checks(false, false, true)));
        assert!(panels.link);
        assert!(!panels.embed);
    }

    #[test]
    fn checking_text_after_embed_hides_embed_and_link() {
        let panels = Panels {
            embed: true,
            text: false,
            link: false,
        }
        .apply(resolve_on_toggle(SendMode::Text, checks(false, true, false)));
        assert!(!panels.embed);
        assert!(!panels.link);
        // The text panel itself stays wherever the markup left it.
        assert!(!panels.text);
    }

    #[test]
    fn unchecking_is_a_no_op() {
        for mode in [SendMode::Embed, SendMode::Text, SendMode::Link] {
            let verdict = resolve_on_toggle(mode, checks(false, false, false));
            assert_eq!(verdict, PanelVisibility::default());
        }
    }

    #[test]
    fn at_most_one_of_embed_and_link_visible_after_any_single_event() {
        let all_checks = (0..8).map(|bits| checks(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0));
        for state in all_checks {
            let after_load = Panels::default().apply(resolve_on_load(state));
            assert!(!(after_load.embed && after_load.link), "{state:?}");

            for mode in [SendMode::Embed, SendMode::Text, SendMode::Link] {
                let after_toggle = after_load.apply(resolve_on_toggle(mode, state));
                assert!(!(after_toggle.embed && after_toggle.link), "{state:?} {mode:?}");
            }
        }
    }

    #[test]
    fn repeating_an_event_is_idempotent() {
        let state = checks(true, false, false);
        let once = Panels::default().apply(resolve_on_toggle(SendMode::Embed, state));
        let twice = once.apply(resolve_on_toggle(SendMode::Embed, state));
        assert_eq!(once, twice);

        let load_once = Panels::default().apply(resolve_on_load(state));
        let load_twice = load_once.apply(resolve_on_load(state));
        assert_eq!(load_once, load_twice);
    }
}
