use facevault_storage::traits::AdminStore;

pub(crate) async fn run(yes: bool) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!("refusing to truncate every table without --yes");
    }
    let storage = crate::connect_postgres().await?;
    let tables = storage.reset().await?;
    println!("Truncated: {}", tables.join(", "));
    Ok(())
}
