use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Locker {
    id: u32,
    label: String,
    rented_to: Option<String>,
}

#[derive(Debug)]
struct LockerCreate {
    label: String,
    /// Explicit number; `None` takes the next sequence number.
    number: Option<u32>,
}

#[derive(Debug)]
enum LockerAction {
    Rent(String),
    Release,
}

#[derive(Debug, thiserror::Error)]
enum LockerError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("locker {0} is not rented")]
    NotRented(u32),
}

#[async_trait]
impl ActorEntity for Locker {
    type Id = u32;
    type Create = LockerCreate;
    type Action = LockerAction;
    type ActionResult = Option<String>;
    type Context = ();
    type Error = LockerError;

    fn assign_id(seq: u32, params: &LockerCreate) -> u32 {
        params.number.unwrap_or(seq)
    }

    fn from_create_params(id: u32, params: LockerCreate) -> Result<Self, Self::Error> {
        if params.label.is_empty() {
            return Err(LockerError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            rented_to: None,
        })
    }

    fn lazy_default(id: &u32) -> Option<Self> {
        // Lockers above 100 spring into existence on first use
        (*id > 100).then(|| Self {
            id: *id,
            label: format!("overflow-{id}"),
            rented_to: None,
        })
    }

    fn accepts(&self, action: &LockerAction) -> bool {
        match action {
            LockerAction::Rent(_) => self.rented_to.is_none(),
            LockerAction::Release => self.rented_to.is_some(),
        }
    }

    async fn handle_action(
        &mut self,
        action: LockerAction,
        _ctx: &Self::Context,
    ) -> Result<Option<String>, Self::Error> {
        match action {
            LockerAction::Rent(who) => Ok(self.rented_to.replace(who)),
            LockerAction::Release => match self.rented_to.take() {
                Some(who) => Ok(Some(who)),
                None => Err(LockerError::NotRented(self.id)),
            },
        }
    }
}

fn locker(label: &str) -> LockerCreate {
    LockerCreate {
        label: label.into(),
        number: None,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client.create(locker("A")).await.unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // 2. Rent it
    let previous = client
        .perform_action(id, LockerAction::Rent("ada".into()))
        .await
        .unwrap();
    assert_eq!(previous, None);

    // Verify state
    let stored: Locker = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.rented_to.as_deref(), Some("ada"));

    // 3. Release, then releasing again is an entity error
    let released = client.perform_action(id, LockerAction::Release).await.unwrap();
    assert_eq!(released.as_deref(), Some("ada"));

    let err = client
        .perform_action(id, LockerAction::Release)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast::<LockerError>(),
        Ok(LockerError::NotRented(1))
    ));

    // 4. Unknown id without a lazy default
    let err = client.perform_action(7, LockerAction::Release).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "7"));
    assert!(client.get(7).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_is_ascending_by_id() {
    let (actor, client) = ResourceActor::<Locker>::new(10);
    tokio::spawn(actor.run(()));

    client
        .create(LockerCreate {
            label: "late".into(),
            number: Some(9),
        })
        .await
        .unwrap();
    client.create(locker("first")).await.unwrap();
    client.create(locker("second")).await.unwrap();

    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 9]);
}

#[tokio::test]
async fn test_sequence_advances_only_on_success() {
    let (actor, client) = ResourceActor::<Locker>::new(10);
    tokio::spawn(actor.run(()));

    assert_eq!(client.create(locker("A")).await.unwrap(), 1);

    let err = client.create(locker("")).await.unwrap_err();
    assert!(matches!(
        err.downcast::<LockerError>(),
        Ok(LockerError::EmptyLabel)
    ));

    // The failed create did not consume a number
    assert_eq!(client.create(locker("B")).await.unwrap(), 2);
    assert_eq!(client.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_duplicate_id_is_a_conflict() {
    let (actor, client) = ResourceActor::<Locker>::new(10);
    tokio::spawn(actor.run(()));

    let explicit = |label: &str| LockerCreate {
        label: label.into(),
        number: Some(5),
    };
    client.create(explicit("A")).await.unwrap();
    let err = client.create(explicit("B")).await.unwrap_err();
    assert!(matches!(err, FrameworkError::Conflict(ref id) if id == "5"));

    let kept = client.get(5).await.unwrap().unwrap();
    assert_eq!(kept.label, "A");
}

#[tokio::test]
async fn test_action_any_claims_lowest_eligible_id() {
    let (actor, client) = ResourceActor::<Locker>::new(10);
    tokio::spawn(actor.run(()));

    for label in ["A", "B"] {
        client.create(locker(label)).await.unwrap();
    }

    let first = client
        .perform_action_any(LockerAction::Rent("ada".into()))
        .await
        .unwrap();
    assert_eq!(first, Some((1, None)));

    let second = client
        .perform_action_any(LockerAction::Rent("bob".into()))
        .await
        .unwrap();
    assert_eq!(second, Some((2, None)));

    // Nothing eligible: no entity is touched
    let none = client
        .perform_action_any(LockerAction::Rent("cy".into()))
        .await
        .unwrap();
    assert!(none.is_none());

    let renters: Vec<_> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.rented_to)
        .collect();
    assert_eq!(renters, vec![Some("ada".to_string()), Some("bob".to_string())]);
}

#[tokio::test]
async fn test_concurrent_action_any_never_double_claims() {
    let (actor, client) = ResourceActor::<Locker>::new(32);
    tokio::spawn(actor.run(()));

    for label in ["A", "B", "C"] {
        client.create(locker(label)).await.unwrap();
    }

    let mut handles = Vec::new();
    for n in 0..6 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .perform_action_any(LockerAction::Rent(format!("renter-{n}")))
                .await
                .unwrap()
        }));
    }

    let mut claimed = Vec::new();
    for handle in handles {
        if let Some((id, _)) = handle.await.unwrap() {
            claimed.push(id);
        }
    }
    claimed.sort();
    assert_eq!(claimed, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_lazy_default_is_stored_only_after_a_successful_action() {
    let (actor, client) = ResourceActor::<Locker>::new(10);
    tokio::spawn(actor.run(()));

    // Reads never materialise it
    assert!(client.get(101).await.unwrap().is_none());

    // A failing action leaves nothing behind
    let err = client
        .perform_action(101, LockerAction::Release)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast::<LockerError>(),
        Ok(LockerError::NotRented(101))
    ));
    assert!(client.get(101).await.unwrap().is_none());

    // A successful one stores it
    client
        .perform_action(101, LockerAction::Rent("ada".into()))
        .await
        .unwrap();
    let stored = client.get(101).await.unwrap().unwrap();
    assert_eq!(stored.label, "overflow-101");
    assert_eq!(stored.rented_to.as_deref(), Some("ada"));
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Locker>::new(10);
    drop(actor);

    let err = client.get(1).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
