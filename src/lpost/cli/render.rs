use chrono::{DateTime, Utc};
use colored::Colorize;
use lpost::api::{CmdMessage, DisplayPost, MessageLevel};
use lpost::data_url;
use lpost::model::Settings;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 20;
const SIZE_WIDTH: usize = 10;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

/// One line per post: position, title and description, size, age.
pub fn render_post_list(posts: &[DisplayPost], relative_times: bool) -> String {
    let mut out = String::new();
    for dp in posts {
        let idx_str = format!("{:>3}. ", dp.index);
        let size = format!(
            "{:>width$}",
            human_size(data_url::decoded_len(&dp.post.image).unwrap_or(0)),
            width = SIZE_WIDTH
        );
        let time = format!(
            "{:>width$}",
            format_time(dp.post.created_at, relative_times),
            width = TIME_WIDTH
        );

        let text = if dp.post.description.is_empty() {
            dp.post.title.clone()
        } else {
            let peek: String = dp
                .post
                .description
                .chars()
                .take(60)
                .map(|c| if c == '\n' { ' ' } else { c })
                .collect();
            format!("{} · {}", dp.post.title, peek)
        };

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + SIZE_WIDTH + TIME_WIDTH + 1);
        let text = truncate_to_width(&text, available);
        let padding = available.saturating_sub(text.width());

        out.push_str(&format!(
            "{}{}{} {}{}\n",
            idx_str.yellow(),
            text,
            " ".repeat(padding),
            size.dimmed(),
            time.dimmed()
        ));
    }
    out
}

pub fn render_full_posts(posts: &[DisplayPost]) -> String {
    let mut out = String::new();
    for (i, dp) in posts.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        let post = &dp.post;
        out.push_str(&format!(
            "{} {}\n",
            format!("{}.", dp.index).yellow(),
            post.title.bold()
        ));
        out.push_str("--------------------------------\n");
        if !post.description.is_empty() {
            out.push_str(&post.description);
            out.push_str("\n\n");
        }
        let format = post
            .format()
            .map(|f| f.mime().to_string())
            .or_else(|| data_url::mime_of(&post.image).map(str::to_string))
            .unwrap_or_else(|| "unknown".to_string());
        let size = human_size(data_url::decoded_len(&post.image).unwrap_or(0));
        out.push_str(&format!("{} {}\n", "id:".dimmed(), post.id));
        out.push_str(&format!("{} {}, {}\n", "image:".dimmed(), format, size));
        out.push_str(&format!(
            "{} {}\n",
            "created:".dimmed(),
            post.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    out
}

pub fn render_settings(settings: &Settings) -> String {
    format!(
        "theme = {}\nanimations = {}\n",
        settings.theme,
        if settings.animations_enabled { "on" } else { "off" }
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time(timestamp: DateTime<Utc>, relative: bool) -> String {
    if !relative {
        return timestamp.format("%Y-%m-%d %H:%M").to_string();
    }
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn human_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KIB {
        format!("{} B", bytes)
    } else if b < KIB * KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{:.1} MiB", b / (KIB * KIB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use lpost::model::{ImageFormat, Post, Theme};

    fn display(index: usize, title: &str, desc: &str) -> DisplayPost {
        DisplayPost {
            index,
            post: Post {
                id: "lx0abc12".into(),
                title: title.into(),
                description: desc.into(),
                image: data_url::encode(&[0u8; 2048], ImageFormat::Jpeg),
                created_at: Utc.with_ymd_and_hms(2024, 3, 9, 18, 30, 0).unwrap(),
            },
        }
    }

    #[test]
    fn list_shows_title_size_and_time() {
        colored::control::set_override(false);
        let out = render_post_list(&[display(1, "Sunset", "by the sea")], false);
        assert!(out.contains("1. Sunset · by the sea"));
        assert!(out.contains("2.0 KiB"));
        assert!(out.contains("2024-03-09 18:30"));
    }

    #[test]
    fn long_titles_are_truncated() {
        colored::control::set_override(false);
        let title = "x".repeat(200);
        let out = render_post_list(&[display(1, &title, "")], false);
        assert!(out.contains('…'));
        assert!(out.lines().next().unwrap().width() <= LINE_WIDTH);
    }

    #[test]
    fn full_view_includes_details() {
        colored::control::set_override(false);
        let out = render_full_posts(&[display(2, "Sunset", "")]);
        assert!(out.contains("2. Sunset"));
        assert!(out.contains("image: image/jpeg, 2.0 KiB"));
        assert!(out.contains("id: lx0abc12"));
    }

    #[test]
    fn settings_lines() {
        let out = render_settings(&Settings {
            theme: Theme::Dark,
            animations_enabled: false,
        });
        assert_eq!(out, "theme = dark\nanimations = off\n");
    }

    #[test]
    fn sizes() {
        assert_eq!(human_size(12), "12 B");
        assert_eq!(human_size(1536), "1.5 KiB");
        assert_eq!(human_size(12 * 1024 * 1024), "12.0 MiB");
    }
}
