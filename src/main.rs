use pipe_commands::Interpreter;

fn main() -> anyhow::Result<()> {
    Interpreter::default().repl()?;
    Ok(())
}
