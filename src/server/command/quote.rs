use rand::{
    seq::{IndexedRandom, IteratorRandom},
    Rng,
};
use serenity::async_trait;

use crate::server::{
    command::{
        descriptor::{choices, CommandDescriptor, OptionDescriptor},
        Command, CommandContext,
    },
    config::Config,
    interaction::{model::Interaction, response::InteractionResponse},
    model::feed::{Quote, QuoteBook},
};

const ANY: &str = "any";

/// `/quote [category]`: a random quote from the community quote feed.
pub struct QuoteCommand;

impl QuoteCommand {
    /// Picks a quote from the requested category, or from a random one for `any`.
    ///
    /// Returns `None` when the category is unknown or has no quotes.
    fn pick<R: Rng + ?Sized>(
        &self,
        book: &QuoteBook,
        category: Option<&str>,
        rng: &mut R,
    ) -> Option<Quote> {
        let author = match category {
            None | Some(ANY) => book.keys().choose(rng)?.clone(),
            Some(value) => self
                .descriptor()
                .choice_name("category", value)?
                .to_string(),
        };

        let text = book.get(&author)?.choose(rng)?.clone();

        Some(Quote { text, author })
    }
}

#[async_trait]
impl Command for QuoteCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("quote", "Receive a democratic Helldivers quote.").option(
            OptionDescriptor::string("category", "Select a specific category (optional)")
                .choices(choices(&[
                    ("any", ANY),
                    ("Democracy Officer", "democracy_officer"),
                    ("Ship Master", "ship_master"),
                    ("Service Technician", "service_technician"),
                    ("General Brasch", "general_brasch"),
                    ("Training Manual Tips", "training_manual_tips"),
                    ("Barbaros Facts", "barbaros_facts"),
                ])),
        )
    }

    async fn handle(
        &self,
        interaction: &Interaction,
        config: &Config,
        ctx: &CommandContext,
    ) -> InteractionResponse {
        let book = match ctx.feeds.all_quotes(&config.quotes_all_url).await {
            Ok(book) => book,
            Err(e) => {
                tracing::error!("Failed to fetch quotes: {}", e);
                return InteractionResponse::ephemeral("Failed to get a quote.");
            }
        };

        let category = interaction.option_str("category");
        let picked = self.pick(&book, category, &mut rand::rng());
        match picked {
            Some(quote) => InteractionResponse::message(ctx.format.quote(&quote.text, &quote.author)),
            None => {
                tracing::warn!("No quote available for category {:?}", category);
                InteractionResponse::ephemeral("Failed to get a quote.")
            }
        }
    }
}
