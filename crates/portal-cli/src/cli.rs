use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Community portal ideas, knowledge base and navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON site export to serve (default from config)
    #[arg(long, global = true, env = "PORTAL_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse and take part in the public ideas board
    #[command(subcommand)]
    Ideas(IdeasCommands),

    /// Triage ideas from the admin dashboard
    #[command(subcommand)]
    Admin(AdminCommands),

    /// Show the knowledge article tree
    Knowledge {
        /// Article to focus on; its collection is shown expanded
        #[arg(long)]
        article: Option<String>,

        /// Collection to show when no article is given
        #[arg(long)]
        collection: Option<String>,
    },

    /// Show the tile menu as the given viewer sees it
    Menu {
        /// Current route, used to mark the active item
        #[arg(long, default_value = "/s/")]
        route: String,

        /// Menu name (default from config)
        #[arg(long)]
        name: Option<String>,

        /// View as a guest user
        #[arg(long)]
        guest: bool,

        /// Profile name of the viewer
        #[arg(long)]
        profile: Option<String>,

        /// Page "app" parameter; "commeditor" requests the draft menu
        #[arg(long)]
        app: Option<String>,
    },

    /// Submit course feedback
    Feedback {
        general: String,
        suggestions: String,
    },

    /// Open a support case through the submission flow
    Case {
        subject: String,
        description: String,

        /// Flow status to report once started, e.g. FINISHED_SCREEN
        #[arg(long)]
        status: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum IdeasCommands {
    /// List ideas
    List {
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        status: Option<String>,

        /// All, "My Ideas", "My Organization", "Commented by me", "Voted by me"
        #[arg(long)]
        show: Option<String>,

        /// popular, recent or most-voted
        #[arg(long)]
        sort: Option<String>,

        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Vote on an idea
    Vote {
        id: String,

        /// up or down
        #[arg(long, default_value = "up")]
        direction: String,
    },

    /// Comment on an idea
    Comment { id: String, text: String },

    /// Submit a new idea
    Create {
        title: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        description: String,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// List ideas with admin filters
    List {
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        status: Option<String>,

        /// high, medium or low
        #[arg(long)]
        priority: Option<String>,

        /// all, assigned, unassigned, high-priority or new
        #[arg(long, default_value = "all")]
        tab: String,

        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Category, status, priority and monthly breakdowns
    Analytics {
        /// Number of top tags to show (default from config)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Assign an idea to a staff member (not persisted)
    Assign {
        id: String,
        staff_id: String,

        #[arg(long)]
        name: String,
    },

    /// Change the status of an idea (not persisted)
    Status { id: String, status: String },

    /// Post a staff response on an idea
    Respond { id: String, text: String },
}
