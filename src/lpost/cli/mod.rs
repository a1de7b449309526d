//! # CLI Layer
//!
//! One possible client for the lpost library. This is the only place that
//! knows about the terminal: it parses arguments, reads image files,
//! prompts before destructive actions, prints results and picks exit codes.

mod args;
mod render;

use args::{Cli, Commands, SettingsCommand};
use clap::Parser;
use directories::ProjectDirs;
use lpost::api::{GalleryApi, NewPost, SettingsAction};
use lpost::clipboard::copy_to_clipboard;
use lpost::config::{parse_toggle, GalleryConfig};
use lpost::error::{GalleryError, Result, ValidationError};
use lpost::model::{ImageFormat, Theme, MAX_IMAGE_BYTES};
use lpost::store::fs::FsBackend;
use render::{print_messages, render_full_posts, render_post_list, render_settings};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

struct AppContext {
    backend: FsBackend,
    config: GalleryConfig,
    data_dir: PathBuf,
}

impl AppContext {
    /// Load the gallery. Commands that must survive an unreadable posts
    /// record (reset) go through `backend` instead.
    fn api(&self) -> Result<GalleryApi<FsBackend>> {
        GalleryApi::open(self.backend.clone())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(resolve_data_dir(&cli)?)?;

    match cli.command {
        Some(Commands::Add {
            image,
            title,
            description,
            mime,
        }) => handle_add(&ctx, &image, title, description, mime),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::View { posts }) => handle_view(&ctx, &posts),
        Some(Commands::Link { post, copy }) => handle_link(&ctx, &post, copy),
        Some(Commands::Download { posts, output }) => handle_download(&ctx, &posts, output),
        Some(Commands::Settings { action }) => handle_settings(&ctx, action),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Reset { yes }) => handle_reset(&ctx, yes),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "lpost=warn",
        1 => "lpost=info",
        _ => "lpost=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => ProjectDirs::from("com", "lpost", "lpost")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| GalleryError::Api("Could not determine data directory".into())),
    }
}

fn init_context(data_dir: PathBuf) -> Result<AppContext> {
    debug!(data_dir = %data_dir.display(), "opening gallery");

    let config = GalleryConfig::load(&data_dir)?;

    Ok(AppContext {
        backend: FsBackend::new(&data_dir),
        config,
        data_dir,
    })
}

fn handle_add(
    ctx: &AppContext,
    image: &Path,
    title: Option<String>,
    description: Option<String>,
    mime: Option<String>,
) -> Result<()> {
    // Reject oversized files before reading them; the store still checks.
    let size = fs::metadata(image).map_err(GalleryError::Io)?.len();
    check_file_size(size)?;
    let bytes = fs::read(image).map_err(GalleryError::Io)?;
    let mime_type = mime.unwrap_or_else(|| guess_mime(image));

    let result = ctx.api()?.add_post(NewPost {
        title: title.unwrap_or_default(),
        description: description.unwrap_or_default(),
        image: Some(bytes),
        mime_type,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn check_file_size(size: u64) -> Result<()> {
    if size > MAX_IMAGE_BYTES as u64 {
        return Err(ValidationError::TooLarge {
            size: usize::try_from(size).unwrap_or(usize::MAX),
            max: MAX_IMAGE_BYTES,
        }
        .into());
    }
    Ok(())
}

/// MIME type from the file extension. Unknown extensions still produce an
/// `image/<ext>` guess so the rejection names the format.
fn guess_mime(path: &Path) -> String {
    if let Some(format) = ImageFormat::from_path(path) {
        return format.mime().to_string();
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("image/{}", ext.to_ascii_lowercase()),
        None => "application/octet-stream".to_string(),
    }
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api()?.list_posts()?;
    print!(
        "{}",
        render_post_list(&result.listed_posts, ctx.config.relative_times)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, posts: &[String]) -> Result<()> {
    let result = ctx.api()?.view_posts(posts)?;
    print!("{}", render_full_posts(&result.listed_posts));
    Ok(())
}

fn handle_link(ctx: &AppContext, post: &str, copy: bool) -> Result<()> {
    let result = ctx.api()?.image_link(post)?;
    for link in &result.links {
        if copy {
            copy_to_clipboard(link)?;
            println!("Image link copied to clipboard.");
        } else {
            println!("{}", link);
        }
    }
    Ok(())
}

fn handle_download(ctx: &AppContext, posts: &[String], output: Option<PathBuf>) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let dir = output.unwrap_or_else(|| ctx.config.download_dir_or(&cwd));
    let result = ctx.api()?.download_posts(posts, &dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_settings(ctx: &AppContext, action: Option<SettingsCommand>) -> Result<()> {
    let action = match action {
        None | Some(SettingsCommand::Show) => SettingsAction::Show,
        Some(SettingsCommand::Theme { value }) => SettingsAction::SetTheme(value.parse::<Theme>()?),
        Some(SettingsCommand::Animations { value }) => {
            SettingsAction::SetAnimations(parse_toggle(&value)?)
        }
    };

    let result = ctx.api()?.settings(action)?;
    print_messages(&result.messages);
    if let Some(settings) = &result.settings {
        print!("{}", render_settings(settings));
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
        }
        (Some(key), None) if key != "download-dir" && key != "relative-times" => {
            return Err(GalleryError::InvalidSetting(format!(
                "unknown config key '{}'",
                key
            )));
        }
        _ => {}
    }

    let download_dir = ctx
        .config
        .download_dir
        .as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "(current directory)".to_string());
    println!("download-dir = {}", download_dir);
    println!(
        "relative-times = {}",
        if ctx.config.relative_times { "on" } else { "off" }
    );
    Ok(())
}

fn handle_reset(ctx: &AppContext, yes: bool) -> Result<()> {
    if !yes {
        let what = match ctx.api() {
            Ok(api) => format!("all {} posts", api.post_count()),
            Err(e) => {
                warn!(error = %e, "gallery unreadable");
                "the unreadable gallery".to_string()
            }
        };
        print!("Delete {} and reset settings? [y/N]: ", what);
        io::stdout().flush().map_err(GalleryError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(GalleryError::Io)?;
        if !matches!(input.trim(), "y" | "Y" | "yes") {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = GalleryApi::wipe(&ctx.backend)?;
    print_messages(&result.messages);
    Ok(())
}
