use clap::{ArgGroup, Parser};
use site_scripts::ScriptRequest;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "site-scripts")]
#[command(about = "Turns a website or pasted copy into 60s and 30s explainer scripts")]
#[command(version)]
#[command(group(ArgGroup::new("pasted").args(["text", "text_file"])))]
pub struct Args {
    /// Website URL to pull copy from
    pub url: Option<String>,

    /// Pasted copy to use instead of the website (needs more than 60 characters)
    #[arg(long)]
    pub text: Option<String>,

    /// Read pasted copy from a file ("-" for stdin)
    #[arg(long)]
    pub text_file: Option<PathBuf>,

    /// Company or product name
    #[arg(long)]
    pub company: Option<String>,

    /// Target audience
    #[arg(long)]
    pub audience: Option<String>,

    /// What the viewer should do next
    #[arg(long)]
    pub goal: Option<String>,

    /// Narrator tone
    #[arg(long)]
    pub tone: Option<String>,

    /// Closing call-to-action sentence
    #[arg(long)]
    pub cta: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the scripts as JSON
    #[arg(long)]
    pub json: bool,

    /// Run the HTTP endpoint instead of generating once
    #[arg(long)]
    pub serve: bool,

    /// Address for the HTTP endpoint (overrides the config file)
    #[arg(long)]
    pub bind: Option<String>,
}

impl Args {
    /// Build the request described by the command line
    pub fn to_request(&self) -> std::io::Result<ScriptRequest> {
        Ok(ScriptRequest {
            url: self.url.clone(),
            pasted_text: self.pasted_text()?,
            company_name: self.company.clone(),
            audience: self.audience.clone(),
            goal: self.goal.clone(),
            tone: self.tone.clone(),
            cta: self.cta.clone(),
        })
    }

    fn pasted_text(&self) -> std::io::Result<Option<String>> {
        match &self.text_file {
            Some(path) if path.as_os_str() == "-" => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(Some(text))
            }
            Some(path) => std::fs::read_to_string(path).map(Some),
            None => Ok(self.text.clone()),
        }
    }
}
