use clap::{Args, Parser, Subcommand};
use prodcat::form::ProductForm;
use prodcat::model::ProductId;

#[derive(Parser, Debug)]
#[command(name = "prodcat", bin_name = "prodcat", version)]
#[command(about = "Manage a small product catalog from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Product fields as typed on the command line. Anything left out is an empty field.
#[derive(Args, Debug, Default, Clone)]
pub struct ProductArgs {
    /// Product name (1-100 characters, unique)
    #[arg(long)]
    pub name: Option<String>,

    /// Optional description (at least 20 characters)
    #[arg(long)]
    pub description: Option<String>,

    /// Price, greater than 0
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Category (see `prodcat categories`)
    #[arg(long)]
    pub category: Option<String>,

    /// Release date as YYYY-MM-DD, not in the future
    #[arg(long)]
    pub release_date: Option<String>,

    /// Units in stock, 0 or more
    #[arg(long, allow_hyphen_values = true)]
    pub stock: Option<String>,
}

impl ProductArgs {
    /// Copies every given field into `form`. Returns whether anything was given.
    pub fn apply_to(&self, form: &mut ProductForm) -> bool {
        let fields = [
            (&self.name, &mut form.name),
            (&self.description, &mut form.description),
            (&self.price, &mut form.price),
            (&self.category, &mut form.category),
            (&self.release_date, &mut form.release_date),
            (&self.stock, &mut form.stock),
        ];

        let mut changed = false;
        for (arg, slot) in fields {
            if let Some(value) = arg {
                slot.clone_from(value);
                changed = true;
            }
        }
        changed
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products, newest first
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a new product
    #[command(alias = "n", display_order = 2)]
    Add {
        #[command(flatten)]
        fields: ProductArgs,

        /// Create the product as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Edit an existing product (only the given fields change)
    #[command(alias = "e", display_order = 3)]
    Edit {
        /// Id of the product
        id: ProductId,

        #[command(flatten)]
        fields: ProductArgs,

        /// Mark the product as active
        #[arg(long, conflicts_with = "inactive")]
        active: bool,

        /// Mark the product as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Show one product in full
    #[command(alias = "v", display_order = 4)]
    Show {
        /// Id of the product
        id: ProductId,
    },

    /// Delete a product
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Id of the product
        id: ProductId,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List the available categories
    #[command(display_order = 6)]
    Categories,

    /// Print the path of the product storage file
    #[command(display_order = 7)]
    Path,

    /// Get or set configuration
    #[command(display_order = 8)]
    Config {
        /// Configuration key (storage-key, preview-chars)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
