use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Ramazon taqvimi buyruqlari:")]
pub enum Command {
    #[command(description = "Saharlik va iftor vaqtlarini olish")]
    Start,
    #[command(description = "Yordam")]
    Help,
}
