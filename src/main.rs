fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = motd::parse_cli();
    match motd::run(&cli) {
        Ok(()) => Ok(()),
        Err(err) => {
            motd::write_cli_error(&err, std::io::stderr())?;
            std::process::exit(1);
        }
    }
}
