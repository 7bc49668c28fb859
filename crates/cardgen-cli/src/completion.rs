//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Generate shell completion script.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, "cardgen", out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Arg;

    #[test]
    fn generate_bash_completion() {
        let mut cmd = Command::new("cardgen").arg(Arg::new("bin").long("bin"));
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("cardgen"));
        assert!(script.contains("--bin"));
    }

    #[test]
    fn generate_zsh_completion() {
        let mut cmd = Command::new("cardgen");
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Zsh, &mut buf);
        assert!(!buf.is_empty());
    }
}
