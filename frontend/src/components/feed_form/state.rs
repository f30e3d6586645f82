//! Component state for the feed group settings form.

use common::model::group::Group;
use uuid::Uuid;

use super::props::FeedFormProps;
use super::visibility::SendModeChecks;

/// State container for the `FeedFormComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules. The webhook and username textareas keep their raw content here
/// and are only split into lists when the form is saved.
pub struct FeedFormComponent {
    /// The group being edited, kept in sync with the form inputs.
    pub group: Group,

    /// Raw content of the webhook URLs textarea, one URL per line.
    pub webhooks_text: String,

    /// Raw content of the usernames textarea, one username per line.
    pub usernames_text: String,

    /// Guard to avoid running first-render initialization more than once.
    pub initialized: bool,
}

impl FeedFormComponent {
    pub fn new(props: &FeedFormProps) -> Self {
        let group = props.group.clone().unwrap_or_else(|| Group {
            uuid: Uuid::new_v4().to_string(),
            ..Group::default()
        });
        let webhooks_text = group.webhooks.join("\n");
        let usernames_text = group.usernames.join("\n");
        Self {
            group,
            webhooks_text,
            usernames_text,
            initialized: false,
        }
    }

    /// Current send-mode checkbox states as held by the form state.
    pub fn send_mode_checks(&self) -> SendModeChecks {
        SendModeChecks {
            embed: self.group.send_as_embed,
            text: self.group.send_as_text,
            link: self.group.send_as_link,
        }
    }
}
