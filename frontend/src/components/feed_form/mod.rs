//! Feed group settings form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! the panel visibility rules, and DOM helpers.
//!
//! The send-mode settings panels are plain containers addressed by id; the
//! component resolves which of them to show once after the first render and
//! again on every send-mode checkbox change.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;
mod visibility;

pub use messages::Msg;
pub use props::FeedFormProps;
pub use state::FeedFormComponent;

use helpers::{apply_panel_visibility, read_send_mode_checks};
use visibility::resolve_on_load;

impl Component for FeedFormComponent {
    type Message = Msg;
    type Properties = FeedFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        FeedFormComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.initialized {
            self.initialized = true;

            // One-shot initialization: read the checkboxes as the document
            // actually rendered them and resolve the panels from that.
            if let Some(checks) = read_send_mode_checks() {
                apply_panel_visibility(&resolve_on_load(checks));
            }
        }
    }
}
