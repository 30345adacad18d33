use std::path::PathBuf;

use barrelgen_core::Generator;
use clap::Args;
use eyre::Result;

#[derive(Args)]
pub struct GenerateCommand {
    /// Source root to scan; its immediate subdirectories receive barrels
    #[arg(short, long, default_value = "src")]
    pub root: PathBuf,

    /// Preview generated barrels without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let generator = Generator::new(&self.root);

        if self.dry_run {
            return self.run_preview(&generator);
        }

        let report = generator.generate()?;

        for module in &report.modules {
            println!("  {}/{}/index.ts", self.root.display(), module);
        }
        println!(
            "File {} has been successfully generated.",
            report.root_barrel.display()
        );

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let files = generator.preview()?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
