//! Update function for the feed group settings form.
//!
//! Elm-style: receives the current `FeedFormComponent` state, the `Context`,
//! and a `Msg`, mutates the state and returns whether the view should
//! re-render.
//!
//! Key behaviors
//! - Send-mode toggles run the panel visibility resolution and apply the
//!   verdict to the DOM, leaving everything else alone.
//! - Field updates keep the backing `Group` in sync with the inputs.
//! - `Save` validates the form, then POSTs the group as JSON to the backend,
//!   with user-facing toast messages.

use common::model::group::{split_unique_lines, valid_embed_color};
use gloo_console::{debug, error, log};
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{apply_panel_visibility, show_toast};
use super::messages::Msg;
use super::state::FeedFormComponent;
use super::visibility::{resolve_on_toggle, SendMode};

/// Central update function for the component.
pub fn update(component: &mut FeedFormComponent, ctx: &Context<FeedFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateName(name) => {
            component.group.name = name;
            true
        }
        Msg::UpdateWebhooks(webhooks) => {
            component.webhooks_text = webhooks;
            true
        }
        Msg::UpdateUsernames(usernames) => {
            component.usernames_text = usernames;
            true
        }

        Msg::SendRetweetsToggled(checked) => {
            component.group.send_retweets = checked;
            true
        }
        Msg::SendRepliesToggled(checked) => {
            component.group.send_replies = checked;
            true
        }
        Msg::OnlyIfMediaToggled(checked) => {
            component.group.only_send_if_media = checked;
            true
        }

        Msg::EmbedToggled(checked) => {
            component.group.send_as_embed = checked;
            debug!("Send-as-embed checkbox changed:", checked);
            apply_panel_visibility(&resolve_on_toggle(
                SendMode::Embed,
                component.send_mode_checks(),
            ));
            true
        }
        Msg::TextToggled(checked) => {
            component.group.send_as_text = checked;
            debug!("Send-as-text checkbox changed:", checked);
            apply_panel_visibility(&resolve_on_toggle(
                SendMode::Text,
                component.send_mode_checks(),
            ));
            true
        }
        Msg::LinkToggled(checked) => {
            component.group.send_as_link = checked;
            debug!("Send-as-link checkbox changed:", checked);
            apply_panel_visibility(&resolve_on_toggle(
                SendMode::Link,
                component.send_mode_checks(),
            ));
            true
        }

        Msg::UpdateEmbedColor(color) => {
            component.group.embed_color = color;
            true
        }
        Msg::EmbedColorRandomToggled(checked) => {
            component.group.embed_color_random = checked;
            true
        }
        Msg::UpdateEmbedAuthorName(name) => {
            component.group.embed_author_name = name;
            true
        }
        Msg::UpdateEmbedAuthorUrl(url) => {
            component.group.embed_author_url = url;
            true
        }
        Msg::UpdateEmbedAuthorIconUrl(url) => {
            component.group.embed_author_icon_url = url;
            true
        }
        Msg::EmbedShowTitleToggled(checked) => {
            component.group.embed_show_title = checked;
            true
        }
        Msg::EmbedShowAuthorToggled(checked) => {
            component.group.embed_show_author = checked;
            true
        }
        Msg::EmbedTimestampToggled(checked) => {
            component.group.embed_timestamp = checked;
            true
        }

        Msg::TextUsernameToggled(checked) => {
            component.group.send_as_text_username = checked;
            true
        }
        Msg::LinkPreviewToggled(checked) => {
            component.group.send_only_link_preview = checked;
            true
        }

        Msg::Save => {
            component.group.webhooks = split_unique_lines(&component.webhooks_text);
            component.group.usernames = split_unique_lines(&component.usernames_text);

            if component.group.name.trim().is_empty() {
                show_toast("A group name is required.");
                return true;
            }
            if component.group.webhooks.is_empty() {
                show_toast("At least one webhook URL is required.");
                return true;
            }
            if component.group.send_as_embed
                && !component.group.embed_color_random
                && !valid_embed_color(&component.group.embed_color)
            {
                show_toast("The embed color must be a #RRGGBB hex value.");
                return true;
            }

            let group = component.group.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let request = match Request::post("/feed").json(&group) {
                    Ok(request) => request,
                    Err(err) => {
                        link.send_message(Msg::SaveFailed(err.to_string()));
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.status() == 200 => {
                        link.send_message(Msg::SaveSucceeded);
                    }
                    Ok(response) => {
                        let body = response.text().await.unwrap_or_default();
                        link.send_message(Msg::SaveFailed(body));
                    }
                    Err(err) => {
                        link.send_message(Msg::SaveFailed(err.to_string()));
                    }
                }
            });
            false
        }
        Msg::SaveSucceeded => {
            log!("Group saved:", component.group.uuid.clone());
            show_toast("Group saved.");
            true
        }
        Msg::SaveFailed(err) => {
            error!("Failed to save group:", err.clone());
            show_toast(&format!("Failed to save group: {err}"));
            true
        }
    }
}
