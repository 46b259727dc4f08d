//! Bookstore CLI Client
//!
//! Command-line interface for querying and extending the catalog.

use clap::{Parser, Subcommand};
use bookstore::client::{AddOutcome, Client};
use bookstore::Book;

/// Bookstore CLI
#[derive(Parser, Debug)]
#[command(name = "bookstore-cli")]
#[command(about = "CLI for the bookstore catalog server")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:9000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a book by ISBN
    Isbn {
        isbn: String,
    },

    /// Look up a book by title (case-insensitive)
    Title {
        title: String,
    },

    /// List every book by an author (case-insensitive)
    Author {
        author: String,
    },

    /// Add a book to the catalog
    Add {
        isbn: String,
        title: String,
        author: String,
        price: f64,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> bookstore::Result<()> {
    let mut client = Client::connect(&args.server)?;

    let lines = match args.command {
        Commands::Isbn { isbn } => client.check_isbn(&isbn)?,
        Commands::Title { title } => client.check_title(&title)?,
        Commands::Author { author } => client.books_by_author(&author)?,
        Commands::Add {
            isbn,
            title,
            author,
            price,
        } => match client.add_book(&Book::new(isbn, title, author, price))? {
            AddOutcome::Added => vec!["Book added".to_string()],
            AddOutcome::Busy => vec!["Server busy, try again".to_string()],
            AddOutcome::Rejected(reason) => vec![reason],
        },
    };

    for line in lines {
        println!("{}", line);
    }

    client.quit()
}
