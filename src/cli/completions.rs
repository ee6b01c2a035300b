use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    rebundle completions bash > ~/.bash_completion.d/rebundle\n\n\
                  Generate zsh completions:\n    rebundle completions zsh > ~/.zfunc/_rebundle\n\n\
                  Generate fish completions:\n    rebundle completions fish > ~/.config/fish/completions/rebundle.fish\n\n\
                  Generate PowerShell completions:\n    rebundle completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
