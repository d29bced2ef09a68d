use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    depfold completions bash > ~/.bash_completion.d/depfold\n\n\
                  Generate zsh completions:\n    depfold completions zsh > ~/.zfunc/_depfold\n\n\
                  Generate fish completions:\n    depfold completions fish > ~/.config/fish/completions/depfold.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
