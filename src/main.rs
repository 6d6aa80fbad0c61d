use gh_activity::{
    driver::{report_error, run},
    prompt::TerminalPrompt,
    setup,
};

#[tokio::main]
async fn main() {
    util::init_tracing();

    let mut out = std::io::stdout();

    match util::load_config_from_env().and_then(|table| setup(&table)) {
        Ok((client, config)) => {
            let mut prompt = TerminalPrompt::default();
            run(&mut prompt, &client, &mut out, config.limit).await;
        }
        Err(e) => report_error(&mut out, &e),
    }
}
