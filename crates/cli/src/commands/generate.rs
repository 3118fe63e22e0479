use std::path::Path;

use clap::Args;
use console::style;
use tracing::info;

use crate::commands::{build_artifacts, current_dir, run_command};
use crate::config::{OutputArgs, Settings, SourceArgs};
use crate::output::write_artifacts;

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub(crate) async fn run(args: GenerateArgs) -> i32 {
    run_command(move || async move {
        let cwd = current_dir()?;
        run_inner(&args, &cwd).await
    })
    .await
}

pub(crate) async fn run_inner(args: &GenerateArgs, cwd: &Path) -> Result<i32, String> {
    let settings = Settings::resolve(&args.source, &args.output, cwd)?;
    let artifacts = build_artifacts(&settings).await?;
    let written = write_artifacts(&settings.out_dir, &artifacts, &settings.extension).await?;

    info!(
        out_dir = %settings.out_dir.display(),
        files = written.len(),
        "Wrote declaration files."
    );
    println!(
        "{} Generated Bot API v{} declarations ({} symbols)",
        style("✓").green().bold(),
        artifacts.version,
        artifacts.symbols
    );
    for path in &written {
        println!("  {}", style(path.display()).dim());
    }
    Ok(0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::commands::tests::{DANGLING_SCHEMA, SCHEMA};
    use std::fs;
    use tempfile::TempDir;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args_for_file(file: &str) -> GenerateArgs {
        GenerateArgs {
            source: SourceArgs {
                schema_file: Some(file.into()),
                ..SourceArgs::default()
            },
            ..GenerateArgs::default()
        }
    }

    #[tokio::test]
    async fn test_generate_from_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("custom.json"), SCHEMA).unwrap();

        let code = run_inner(&args_for_file("custom.json"), temp_dir.path())
            .await
            .unwrap();
        assert_eq!(code, 0);

        let out_dir = temp_dir.path().join("generated");
        for name in ["objects.d.ts", "params.d.ts", "methods.d.ts", "index.d.ts"] {
            assert!(out_dir.join(name).is_file(), "{name} was not written");
        }
        let methods = fs::read_to_string(out_dir.join("methods.d.ts")).unwrap();
        assert!(methods.contains("  getMe: CallAPIWithoutParams<Objects.TelegramUser>;\n"));
        assert!(methods.contains("  sendMessage: CallAPI<Params.SendMessageParams, boolean>;\n"));
    }

    #[tokio::test]
    async fn test_generate_from_url_with_config_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SCHEMA))
            .expect(1)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("tgtypes.toml"),
            format!(
                "schema_url = \"{}/custom.json\"\nout_dir = \"types\"\nobject_prefix = \"Tg\"\nextension = \"ts\"\n",
                server.uri()
            ),
        )
        .unwrap();

        let code = run_inner(&GenerateArgs::default(), temp_dir.path())
            .await
            .unwrap();
        assert_eq!(code, 0);

        let objects = fs::read_to_string(temp_dir.path().join("types/objects.ts")).unwrap();
        assert!(objects.contains("export interface TgUser {\n"));
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_dangling_references() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("custom.json"), DANGLING_SCHEMA).unwrap();

        let mut args = args_for_file("custom.json");
        args.output.strict = true;
        let err = run_inner(&args, temp_dir.path()).await.unwrap_err();
        assert_eq!(err, "Unknown object reference(s): Message.chat -> Chat");
        assert!(!temp_dir.path().join("generated").exists());
    }

    #[tokio::test]
    async fn test_lenient_mode_generates_despite_dangling_references() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("custom.json"), DANGLING_SCHEMA).unwrap();

        let code = run_inner(&args_for_file("custom.json"), temp_dir.path())
            .await
            .unwrap();
        assert_eq!(code, 0);
        let objects =
            fs::read_to_string(temp_dir.path().join("generated/objects.d.ts")).unwrap();
        assert!(objects.contains("  chat: TelegramChat;\n"));
    }
}
