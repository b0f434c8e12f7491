//! Resolve a link from the command line and print the resulting card.
//!
//! ```bash
//! cargo run --example card_cli -- https://www.rust-lang.org
//! ```

use clap::{Arg, Command};
use colored::Colorize;
use link_preview_card::{LinkPreviewCard, MetadataResolver, Resolver};

#[tokio::main]
async fn main() {
    let matches = Command::new("card_cli")
        .about("Fetch link metadata and render a preview card")
        .arg(Arg::new("url").required(true).help("Web link to preview"))
        .arg(
            Arg::new("lang")
                .long("lang")
                .default_value("en")
                .help("Label language (ar, es, hi, zh)"),
        )
        .get_matches();

    let url = matches.get_one::<String>("url").unwrap();
    let lang = matches.get_one::<String>("lang").unwrap();

    let resolver = MetadataResolver::new();
    match resolver.resolve(url).await {
        Ok(model) => {
            println!("{} {}", "Title:".green().bold(), model.title);
            println!("{} {}", "Description:".green().bold(), model.description);
            println!("{} {}", "Image:".green().bold(), model.image_link);
            if let Some(logo) = &model.logo {
                println!("{} {}", "Logo:".green().bold(), logo);
            }
            println!("{} {}", "Theme color:".green().bold(), model.theme_color);
        }
        Err(e) => {
            eprintln!("{} {}", "Failed to resolve link:".red().bold(), e);
            std::process::exit(1);
        }
    }

    let card = LinkPreviewCard::new().with_language(lang);
    card.set_web_link(url.clone()).await;
    println!("\n{}", "Rendered fragment:".blue().bold());
    println!("{}", card.render().await);
}
