//! View rendering for the feed group settings form.
//!
//! The three send-mode checkboxes and their settings panels carry stable
//! element ids (`send_as_embed` / `embed_settings` and friends). The panels
//! are rendered hidden; only the visibility controller mutates their inline
//! `display` style, so the markup default survives re-renders.

use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{
    CHECKBOX_SEND_AS_EMBED, CHECKBOX_SEND_AS_LINK, CHECKBOX_SEND_AS_TEXT, PANEL_EMBED_SETTINGS,
    PANEL_LINK_SETTINGS, PANEL_TEXT_SETTINGS,
};
use super::messages::Msg;
use super::state::FeedFormComponent;

/// Main view function for the feed form component.
pub fn view(component: &FeedFormComponent, ctx: &Context<FeedFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <form class="feed-form" onsubmit={link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Save
        })}>
            { build_identity_section(component, link) }
            { build_delivery_section(component, link) }
            { build_send_mode_section(component, link) }
            { build_embed_panel(component, link) }
            { build_text_panel(component, link) }
            { build_link_panel(component, link) }

            <button type="submit" class="save-btn">{"Save"}</button>
        </form>
    }
}

/// Group name plus the webhook and username textareas.
fn build_identity_section(component: &FeedFormComponent, link: &Scope<FeedFormComponent>) -> Html {
    html! {
        <fieldset>
            <legend>{"Group"}</legend>
            <label>
                {"Group name"}
                <input
                    type="text"
                    value={component.group.name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateName(input.value())
                    })}
                />
            </label>
            <label>
                {"Webhook URLs, one per line"}
                <textarea
                    value={component.webhooks_text.clone()}
                    rows={3}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::UpdateWebhooks(input.value())
                    })}
                />
            </label>
            <label>
                {"Usernames, one per line"}
                <textarea
                    value={component.usernames_text.clone()}
                    rows={3}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::UpdateUsernames(input.value())
                    })}
                />
            </label>
        </fieldset>
    }
}

fn build_delivery_section(component: &FeedFormComponent, link: &Scope<FeedFormComponent>) -> Html {
    html! {
        <fieldset>
            <legend>{"Delivery"}</legend>
            { checkbox(None, "Include retweets?", component.group.send_retweets,
                link.callback(|e: Event| Msg::SendRetweetsToggled(checked(&e)))) }
            { checkbox(None, "Include replies?", component.group.send_replies,
                link.callback(|e: Event| Msg::SendRepliesToggled(checked(&e)))) }
            { checkbox(None, "Only send if the post has media?", component.group.only_send_if_media,
                link.callback(|e: Event| Msg::OnlyIfMediaToggled(checked(&e)))) }
        </fieldset>
    }
}

/// The three mutually-exclusive send-mode checkboxes.
fn build_send_mode_section(component: &FeedFormComponent, link: &Scope<FeedFormComponent>) -> Html {
    html! {
        <fieldset>
            <legend>{"Send mode"}</legend>
            { checkbox(Some(CHECKBOX_SEND_AS_EMBED), "Send as embed?", component.group.send_as_embed,
                link.callback(|e: Event| Msg::EmbedToggled(checked(&e)))) }
            { checkbox(Some(CHECKBOX_SEND_AS_TEXT), "Send as text?", component.group.send_as_text,
                link.callback(|e: Event| Msg::TextToggled(checked(&e)))) }
            { checkbox(Some(CHECKBOX_SEND_AS_LINK), "Send only link?", component.group.send_as_link,
                link.callback(|e: Event| Msg::LinkToggled(checked(&e)))) }
        </fieldset>
    }
}

fn build_embed_panel(component: &FeedFormComponent, link: &Scope<FeedFormComponent>) -> Html {
    html! {
        <div id={PANEL_EMBED_SETTINGS} class="settings-panel" style="display: none;">
            <h3>{"Embed settings"}</h3>
            <label>
                {"Embed color"}
                <input
                    type="text"
                    placeholder="#1DA1F2"
                    value={component.group.embed_color.clone()}
                    disabled={component.group.embed_color_random}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateEmbedColor(input.value())
                    })}
                />
            </label>
            { checkbox(None, "Random embed color?", component.group.embed_color_random,
                link.callback(|e: Event| Msg::EmbedColorRandomToggled(checked(&e)))) }
            <label>
                {"Author name"}
                <input
                    type="text"
                    value={component.group.embed_author_name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateEmbedAuthorName(input.value())
                    })}
                />
            </label>
            <label>
                {"Author URL"}
                <input
                    type="url"
                    value={component.group.embed_author_url.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateEmbedAuthorUrl(input.value())
                    })}
                />
            </label>
            <label>
                {"Author icon URL"}
                <input
                    type="url"
                    value={component.group.embed_author_icon_url.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateEmbedAuthorIconUrl(input.value())
                    })}
                />
            </label>
            { checkbox(None, "Show title?", component.group.embed_show_title,
                link.callback(|e: Event| Msg::EmbedShowTitleToggled(checked(&e)))) }
            { checkbox(None, "Show author?", component.group.embed_show_author,
                link.callback(|e: Event| Msg::EmbedShowAuthorToggled(checked(&e)))) }
            { checkbox(None, "Show timestamp?", component.group.embed_timestamp,
                link.callback(|e: Event| Msg::EmbedTimestampToggled(checked(&e)))) }
        </div>
    }
}

fn build_text_panel(component: &FeedFormComponent, link: &Scope<FeedFormComponent>) -> Html {
    html! {
        <div id={PANEL_TEXT_SETTINGS} class="settings-panel" style="display: none;">
            <h3>{"Text settings"}</h3>
            { checkbox(None, "Append username before text?", component.group.send_as_text_username,
                link.callback(|e: Event| Msg::TextUsernameToggled(checked(&e)))) }
        </div>
    }
}

fn build_link_panel(component: &FeedFormComponent, link: &Scope<FeedFormComponent>) -> Html {
    html! {
        <div id={PANEL_LINK_SETTINGS} class="settings-panel" style="display: none;">
            <h3>{"Link settings"}</h3>
            { checkbox(None, "Show link preview?", component.group.send_only_link_preview,
                link.callback(|e: Event| Msg::LinkPreviewToggled(checked(&e)))) }
        </div>
    }
}

/// Renders a labeled checkbox. `id` is only set for the send-mode boxes,
/// which the visibility controller reads back from the document.
fn checkbox(
    id: Option<&'static str>,
    label: &'static str,
    is_checked: bool,
    onchange: Callback<Event>,
) -> Html {
    html! {
        <label class="checkbox-row">
            <input type="checkbox" id={id} checked={is_checked} {onchange} />
            { label }
        </label>
    }
}

fn checked(e: &Event) -> bool {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.checked()
}
