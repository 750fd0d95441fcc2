//! Build helpers: man pages and shell completions for `corpus-lens`.

use std::fs;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Project automation")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/dist/man")]
        out: Utf8PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/dist/completions")]
        out: Utf8PathBuf,
        /// Only this shell (default: all)
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => gen_man(&out),
        Task::Completions { out, shell } => gen_completions(&out, shell),
    }
}

fn gen_man(out: &Utf8Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {out}"))?;
    let cmd = corpus_lens::command();

    write_man(out, "corpus-lens", cmd.clone())?;
    for sub in cmd.get_subcommands() {
        let name = format!("corpus-lens-{}", sub.get_name());
        write_man(out, &name, sub.clone().name(name.clone()))?;
    }
    Ok(())
}

fn write_man(out: &Utf8Path, name: &str, cmd: clap::Command) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buf)?;
    let path = out.join(format!("{name}.1"));
    fs::write(&path, buf).with_context(|| format!("failed to write {path}"))?;
    println!("wrote {path}");
    Ok(())
}

fn gen_completions(out: &Utf8Path, shell: Option<Shell>) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {out}"))?;
    let shells = shell.map_or_else(|| Shell::value_variants().to_vec(), |s| vec![s]);
    for shell in shells {
        let mut cmd = corpus_lens::command();
        let path = clap_complete::generate_to(shell, &mut cmd, "corpus-lens", out.as_str())
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
