use actor_framework::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Manifest {
    id: String,
    cargo: String,
    tonnes: u32,
}

#[derive(Debug)]
struct ManifestCreate {
    id: Option<String>,
    cargo: String,
    tonnes: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("manifest has no cargo")]
struct EmptyManifest;

impl ActorEntity for Manifest {
    type Id = String;
    type Create = ManifestCreate;
    type Query = u32;
    type Error = EmptyManifest;

    fn from_create_params(seq: u64, params: ManifestCreate) -> Result<Self, Self::Error> {
        if params.cargo.is_empty() {
            return Err(EmptyManifest);
        }
        Ok(Self {
            id: params.id.unwrap_or_else(|| format!("manifest-{seq}")),
            cargo: params.cargo,
            tonnes: params.tonnes,
        })
    }

    fn id(&self) -> &String {
        &self.id
    }

    fn matches(&self, min_tonnes: &u32) -> bool {
        self.tonnes >= *min_tonnes
    }
}

fn manifest(cargo: &str, tonnes: u32) -> ManifestCreate {
    ManifestCreate {
        id: None,
        cargo: cargo.to_string(),
        tonnes,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Manifest>::new(10);
    let handle = tokio::spawn(actor.run());

    // 1. Create
    let first = client.create(manifest("grain", 40)).await.unwrap();
    assert_eq!(first.id, "manifest-1");

    let second = client.create(manifest("steel", 90)).await.unwrap();
    assert_eq!(second.id, "manifest-2");

    // 2. List keeps insertion order
    let all = client.list().await.unwrap();
    assert_eq!(all, vec![first.clone(), second.clone()]);

    // 3. Find returns the first match
    let heavy = client.find(50).await.unwrap();
    assert_eq!(heavy, Some(second));
    let any = client.find(0).await.unwrap();
    assert_eq!(any, Some(first));
    let none = client.find(1_000).await.unwrap();
    assert!(none.is_none());

    // 4. Shutdown once the last client is gone
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_create_appends_nothing() {
    let (actor, client) = ResourceActor::<Manifest>::new(10);
    tokio::spawn(actor.run());

    client.create(manifest("timber", 10)).await.unwrap();
    let result = client.create(manifest("", 10)).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));

    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 1);

    // sequence numbers are not reused after a rejection
    let next = client.create(manifest("coal", 10)).await.unwrap();
    assert_eq!(next.id, "manifest-3");
}

#[tokio::test]
async fn test_duplicate_payloads_are_both_stored() {
    let (actor, client) = ResourceActor::<Manifest>::new(10);
    tokio::spawn(actor.run());

    for _ in 0..2 {
        client
            .create(ManifestCreate {
                id: Some("fixed".to_string()),
                cargo: "salt".to_string(),
                tonnes: 3,
            })
            .await
            .unwrap();
    }

    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|m| m.id == "fixed"));
}

#[tokio::test]
async fn test_list_returns_a_copy() {
    let (actor, client) = ResourceActor::<Manifest>::new(10);
    tokio::spawn(actor.run());

    client.create(manifest("wool", 4)).await.unwrap();
    let mut snapshot = client.list().await.unwrap();
    snapshot.clear();

    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_creates_are_serialized() {
    let (actor, client) = ResourceActor::<Manifest>::new(8);
    tokio::spawn(actor.run());

    let mut handles = Vec::new();
    for i in 0..50u32 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.create(manifest("mixed", i)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 50);
    let mut ids: Vec<_> = all.iter().map(|m| m.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[tokio::test]
async fn test_closed_actor_reports_error() {
    let (actor, client) = ResourceActor::<Manifest>::new(1);
    drop(actor);

    assert!(client.is_closed());
    assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
}
