use serenity::async_trait;

use crate::server::{
    command::{descriptor::CommandDescriptor, Command, CommandContext},
    config::Config,
    interaction::{model::Interaction, response::InteractionResponse},
};

/// `/help`: server orientation and command overview, visible only to the caller.
pub struct HelpCommand;

impl HelpCommand {
    fn text(code_of_conduct: &str) -> String {
        [
            "**Welcome to HellDads! Here's how to get started:**".to_string(),
            String::new(),
            format!(
                "• <#1301288282616758363> – Learn our rules and [Code of Conduct]({}).",
                code_of_conduct
            ),
            "• <#1301285072896266254> – Introduce yourself and check what's going on.".to_string(),
            "• <#1309187415487025262> – Grab roles like **LFG** to dive with other dads."
                .to_string(),
            "• <#1301290839661875202> – Find teammates for your next dive.".to_string(),
            "• <#1362454651714277376> – Try new loadouts and get inspiration for your own."
                .to_string(),
            "• <#1310726352747630642> & <#1310723505553277028> – Community challenges and rewards."
                .to_string(),
            "• <#1345040640949489674> – Join a sub-faction for future events.".to_string(),
            "• <#1301285073496182865> – Share and enjoy clips and highlights.".to_string(),
            "• <#1308493598203052155> – Stay updated on all community related things.".to_string(),
            String::new(),
            "This bot also supports helpful commands:".to_string(),
            "• `/modhelp` – Open a private support channel with the mods.".to_string(),
            "• `/lfg` – Find friends by submitting a looking for group request.".to_string(),
            "• `/quote` – Get a democratic Helldivers quote.".to_string(),
            "• `/stats` – Display community statistics.".to_string(),
            "• `/event` – Display the current event and statistics.".to_string(),
            "• `/submit` – Submit your mission results for the current community event."
                .to_string(),
            "• `/update` – Update your game statistics for the highscores.".to_string(),
            "• `/highscores` – Display highscores of all HellDads who /update their results."
                .to_string(),
            "• `/help` – Show this help message.".to_string(),
        ]
        .join("\n")
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new(
            "help",
            "Get information about Dadbot commands and server tips",
        )
    }

    async fn handle(
        &self,
        _interaction: &Interaction,
        config: &Config,
        _ctx: &CommandContext,
    ) -> InteractionResponse {
        InteractionResponse::ephemeral(Self::text(config.code_of_conduct_url.as_str()))
    }
}
