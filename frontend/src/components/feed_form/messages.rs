#[derive(Clone)]
pub enum Msg {
    UpdateName(String),
    UpdateWebhooks(String),
    UpdateUsernames(String),

    SendRetweetsToggled(bool),
    SendRepliesToggled(bool),
    OnlyIfMediaToggled(bool),

    EmbedToggled(bool),
    TextToggled(bool),
    LinkToggled(bool),

    UpdateEmbedColor(String),
    EmbedColorRandomToggled(bool),
    UpdateEmbedAuthorName(String),
    UpdateEmbedAuthorUrl(String),
    UpdateEmbedAuthorIconUrl(String),
    EmbedShowTitleToggled(bool),
    EmbedShowAuthorToggled(bool),
    EmbedTimestampToggled(bool),

    TextUsernameToggled(bool),
    LinkPreviewToggled(bool),

    Save,
    SaveSucceeded,
    SaveFailed(String),
}
