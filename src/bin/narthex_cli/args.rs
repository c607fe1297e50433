//! Command-line surface for `narthex-cli`.

#![deny(clippy::all, clippy::pedantic)]

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, builder::BoolishValueParser};

#[derive(Parser, Debug)]
#[command(name = "narthex-cli", version, about = "Narthex content administration CLI", long_about = None)]
pub struct Cli {
    /// Backend base URL, e.g. <https://backend.example.org>
    #[arg(long, env = "NARTHEX_SITE_URL")]
    pub site: Option<String>,

    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "NARTHEX_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(long = "log-json", value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub log_json: Option<bool>,

    /// Override where the session token is persisted.
    #[arg(long = "token-path", env = "NARTHEX_TOKEN_PATH", value_name = "PATH")]
    pub token_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and persist a local session (credentials are not verified)
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Sign out and discard the local session
    Logout,
    /// Show the signed-in operator
    Whoami,
    /// Aggregate item counts across every content kind
    Dashboard,
    /// Sermon management
    Sermons(SermonsArgs),
    /// Event management
    Events(EventsArgs),
    /// Announcement management (backend not wired up yet)
    Announcements(AnnouncementsArgs),
    /// Page management (backend not wired up yet)
    Pages(PagesArgs),
    /// Photo gallery management
    Gallery(GalleryArgs),
}

#[derive(Parser, Debug)]
pub struct SermonsArgs {
    #[command(subcommand)]
    pub action: SermonsCmd,
}

#[derive(Subcommand, Debug)]
pub enum SermonsCmd {
    /// List sermons, optionally narrowed by a search term
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a sermon by id
    Get {
        #[arg(long)]
        id: String,
    },
    /// Create a sermon
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        preacher: String,
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "")]
        scripture: String,
        #[arg(long)]
        series: Option<String>,
        #[arg(long)]
        audio_url: Option<String>,
        #[arg(long)]
        video_url: Option<String>,
    },
    /// Update a sermon; omitted flags keep the stored values
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        preacher: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        scripture: Option<String>,
        #[arg(long)]
        series: Option<String>,
        #[arg(long)]
        audio_url: Option<String>,
        #[arg(long)]
        video_url: Option<String>,
    },
    /// Delete a sermon (requires --yes to confirm)
    Delete {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub action: EventsCmd,
}

#[derive(Subcommand, Debug)]
pub enum EventsCmd {
    /// List events, optionally narrowed by a search term
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Get an event by id
    Get {
        #[arg(long)]
        id: String,
    },
    /// Create an event
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        date: String,
        /// Start time HH:MM; held client-side only, the backend stores no
        /// time column
        #[arg(long, default_value = "")]
        time: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
        registration_required: Option<bool>,
        #[arg(long)]
        max_attendees: Option<u32>,
    },
    /// Update an event; omitted flags keep the stored values
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
        registration_required: Option<bool>,
        #[arg(long)]
        max_attendees: Option<u32>,
    },
    /// Delete an event (requires --yes to confirm)
    Delete {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
pub struct AnnouncementsArgs {
    #[command(subcommand)]
    pub action: AnnouncementsCmd,
}

#[derive(Subcommand, Debug)]
pub enum AnnouncementsCmd {
    /// List announcements, optionally narrowed by a search term
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Create an announcement
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, value_enum)]
        priority: Option<PriorityArg>,
        #[arg(long)]
        publish_date: Option<String>,
        #[arg(long)]
        expiry_date: Option<String>,
        #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
        is_active: Option<bool>,
    },
    /// Delete an announcement (requires --yes to confirm)
    Delete {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
pub struct PagesArgs {
    #[command(subcommand)]
    pub action: PagesCmd,
}

#[derive(Subcommand, Debug)]
pub enum PagesCmd {
    /// List pages, optionally narrowed by a search term
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a page; the slug is derived from the title unless given
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
        is_published: Option<bool>,
        #[arg(long)]
        meta_description: Option<String>,
    },
    /// Update a page; the stored slug is kept unless --slug is given
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
        is_published: Option<bool>,
        #[arg(long)]
        meta_description: Option<String>,
    },
    /// Delete a page (requires --yes to confirm)
    Delete {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
pub struct GalleryArgs {
    #[command(subcommand)]
    pub action: GalleryCmd,
}

#[derive(Subcommand, Debug)]
pub enum GalleryCmd {
    /// List galleries, optionally narrowed by a search term
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a gallery by id
    Get {
        #[arg(long)]
        id: String,
    },
    /// Create a gallery, uploading a cover image and photos
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long)]
        category: Option<String>,
        /// Cover image file
        #[arg(long, value_name = "FILE")]
        cover: Option<PathBuf>,
        /// Additional photo file; may be given multiple times
        #[arg(long = "photo", value_name = "FILE")]
        photos: Vec<PathBuf>,
    },
    /// Update a gallery; newly given files are uploaded in addition to the
    /// stored images
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_name = "FILE")]
        cover: Option<PathBuf>,
        #[arg(long = "photo", value_name = "FILE")]
        photos: Vec<PathBuf>,
    },
    /// Delete a gallery (requires --yes to confirm)
    Delete {
        #[arg(long)]
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl PriorityArg {
    pub fn as_str(self) -> &'static str {
        match self {
            PriorityArg::Low => "low",
            PriorityArg::Medium => "medium",
            PriorityArg::High => "high",
        }
    }
}

impl fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
