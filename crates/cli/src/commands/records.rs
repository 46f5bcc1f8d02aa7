use facevault_storage::traits::EmbeddingStore;

pub(crate) async fn run(person_id: &str) -> anyhow::Result<()> {
    let storage = crate::connect_postgres().await?;
    let records = storage.get_embeddings_by_person_id(person_id).await?;
    if records.is_empty() {
        anyhow::bail!("Person ID not found: {person_id}");
    }
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
