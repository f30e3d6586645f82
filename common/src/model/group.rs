use serde::{Deserialize, Serialize};

/// A feed group: a named set of feeds that get sent to one or more Discord
/// webhooks, together with the delivery options the settings form edits.
///
/// The three `send_as_*` flags are mutually exclusive in intent (the form
/// enforces the visibility of their settings panels, the backend decides
/// which sender to use). `send_as_embed` is the default delivery mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub uuid: String,
    pub name: String,
    pub webhooks: Vec<String>,
    pub usernames: Vec<String>,

    pub send_retweets: bool,
    pub send_replies: bool,
    pub only_send_if_media: bool,

    pub send_as_embed: bool,
    pub send_as_text: bool,
    pub send_as_link: bool,

    /// Append the username before the text when sending as plain text.
    pub send_as_text_username: bool,

    /// Embed appearance. `embed_color` is a `#RRGGBB` string and is ignored
    /// when `embed_color_random` is set.
    pub embed_color: String,
    pub embed_color_random: bool,
    pub embed_author_name: String,
    pub embed_author_url: String,
    pub embed_author_icon_url: String,
    pub embed_show_title: bool,
    pub embed_show_author: bool,
    pub embed_timestamp: bool,

    /// Let Discord render a link preview when sending only the link.
    pub send_only_link_preview: bool,
}

impl Default for Group {
    fn default() -> Self {
        Self {
            uuid: String::new(),
            name: String::new(),
            webhooks: Vec::new(),
            usernames: Vec::new(),
            send_retweets: true,
            send_replies: false,
            only_send_if_media: false,
            send_as_embed: true,
            send_as_text: false,
            send_as_link: false,
            send_as_text_username: true,
            embed_color: "#1DA1F2".to_string(),
            embed_color_random: false,
            embed_author_name: String::new(),
            embed_author_url: String::new(),
            embed_author_icon_url: String::new(),
            embed_show_title: false,
            embed_show_author: true,
            embed_timestamp: true,
            send_only_link_preview: true,
        }
    }
}

/// Splits textarea content into a deduplicated list, one entry per line.
///
/// Lines are trimmed and blank lines are dropped. The first occurrence of a
/// duplicate wins, so the order the user typed is preserved.
pub fn split_unique_lines(input: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !seen.iter().any(|existing| existing == line) {
            seen.push(line.to_string());
        }
    }
    seen
}

/// Checks that a color is a `#RRGGBB` hex string.
pub fn valid_embed_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_embed_mode() {
        let group = Group::default();
        assert!(group.send_as_embed);
        assert!(!group.send_as_text);
        assert!(!group.send_as_link);
        assert_eq!(group.embed_color, "#1DA1F2");
    }

    #[test]
    fn defaults_match_the_stored_group_defaults() {
        let group = Group::default();

        assert!(group.uuid.is_empty());
        assert!(group.name.is_empty());
        assert!(group.webhooks.is_empty());
        assert!(group.usernames.is_empty());

        assert!(group.send_retweets);
        assert!(!group.send_replies);
        assert!(!group.only_send_if_media);
        assert!(group.send_as_text_username);

        assert!(!group.embed_color_random);
        assert!(group.embed_author_name.is_empty());
        assert!(group.embed_author_url.is_empty());
        assert!(group.embed_author_icon_url.is_empty());
        assert!(!group.embed_show_title);
        assert!(group.embed_show_author);
        assert!(group.embed_timestamp);

        assert!(group.send_only_link_preview);
    }

    #[test]
    fn split_unique_lines_dedupes_and_trims() {
        let input = "https://discord.com/api/webhooks/1/a\n\n  https://discord.com/api/webhooks/2/b  \nhttps://discord.com/api/webhooks/1/a\n";
        assert_eq!(
            split_unique_lines(input),
            vec![
                "https://discord.com/api/webhooks/1/a".to_string(),
                "https://discord.com/api/webhooks/2/b".to_string(),
            ]
        );
    }

    #[test]
    fn split_unique_lines_empty_input() {
        assert!(split_unique_lines("").is_empty());
        assert!(split_unique_lines("\n  \n\n").is_empty());
    }

    #[test]
    fn embed_color_validation() {
        assert!(valid_embed_color("#1DA1F2"));
        assert!(valid_embed_color("#abcdef"));
        assert!(!valid_embed_color("1DA1F2"));
        assert!(!valid_embed_color("#1DA1F"));
        assert!(!valid_embed_color("#1DA1F2F"));
        assert!(!valid_embed_color("#1DA1GZ"));
        assert!(!valid_embed_color(""));
    }
}
