//! Group use cases, including the documented membership race.

mod mocks;

use contacts_api::models::{Contact, Group};
use contacts_api::repositories::{GroupRepository, InMemoryGroupRepository};
use contacts_api::services::{ContactService, ContactServiceImpl, GroupService, GroupServiceImpl};
use contacts_api::RequestContext;
use mocks::{MockContactRepository, MockGroupRepository};
use std::sync::Arc;

fn setup() -> (MockContactRepository, MockGroupRepository, GroupServiceImpl) {
    let contacts = MockContactRepository::new();
    let groups = MockGroupRepository::new();
    let service = GroupServiceImpl::new(Arc::new(contacts.clone()), Arc::new(groups.clone()));
    (contacts, groups, service)
}

#[tokio::test]
async fn test_add_contact_grows_membership_by_one() {
    let (contacts, groups, service) = setup();
    contacts.add_contact(Contact::new("c1", "Ada", "a@x"));
    let mut existing = Group::new("g1", "Friends");
    existing.add_member("c1");
    groups.add_group(existing);
    let ctx = RequestContext::detached();

    let group = service.add_contact_to_group(&ctx, "c1", "g1").await.unwrap();

    assert_eq!(group.member_count("c1"), 2);
    assert_eq!(groups.stored("g1").unwrap().contact_ids, vec!["c1", "c1"]);
}

#[tokio::test]
async fn test_add_unknown_contact_leaves_group_untouched() {
    let (_contacts, groups, service) = setup();
    groups.add_group(Group::new("g1", "Friends"));
    let ctx = RequestContext::detached();

    let err = service
        .add_contact_to_group(&ctx, "ghost", "g1")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(groups.stored("g1").unwrap().contact_ids.is_empty());
    assert_eq!(groups.get_call_count("get_by_id"), 0);
    assert_eq!(groups.get_call_count("save"), 0);
}

#[tokio::test]
async fn test_add_to_unknown_group_is_not_found() {
    let (contacts, groups, service) = setup();
    contacts.add_contact(Contact::new("c1", "Ada", "a@x"));
    let ctx = RequestContext::detached();

    let err = service
        .add_contact_to_group(&ctx, "c1", "g404")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(groups.get_call_count("save"), 0);
}

#[tokio::test]
async fn test_add_uses_read_modify_write_not_atomic_append() {
    let (contacts, groups, service) = setup();
    contacts.add_contact(Contact::new("c1", "Ada", "a@x"));
    groups.add_group(Group::new("g1", "Friends"));
    let ctx = RequestContext::detached();

    service.add_contact_to_group(&ctx, "c1", "g1").await.unwrap();

    assert_eq!(contacts.get_call_count("get_by_id"), 1);
    assert_eq!(groups.get_call_count("get_by_id"), 1);
    assert_eq!(groups.get_call_count("save"), 1);
    assert_eq!(groups.get_call_count("add_contact_to_group"), 0);
}

#[tokio::test]
async fn test_concurrent_adds_can_lose_a_membership() {
    let (contacts, groups, service) = setup();
    contacts.add_contact(Contact::new("c1", "Ada", "a@x"));
    contacts.add_contact(Contact::new("c2", "Grace", "g@x"));
    groups.add_group(Group::new("g1", "Friends"));
    // Both calls read the empty group before either one saves.
    groups.synchronize_reads(2);

    let ctx_a = RequestContext::new(Some("trace-a"));
    let ctx_b = RequestContext::new(Some("trace-b"));
    let (a, b) = futures::future::join(
        service.add_contact_to_group(&ctx_a, "c1", "g1"),
        service.add_contact_to_group(&ctx_b, "c2", "g1"),
    )
    .await;

    assert_eq!(a.unwrap().contact_ids.len(), 1);
    assert_eq!(b.unwrap().contact_ids.len(), 1);

    let stored = groups.stored("g1").unwrap();
    assert_eq!(stored.contact_ids.len(), 1, "last writer wins");
    assert_eq!(groups.get_call_count("save"), 2);
}

#[tokio::test]
async fn test_atomic_append_keeps_every_reference() {
    let repo = Arc::new(InMemoryGroupRepository::new());
    repo.save(&Group::new("g1", "Friends")).await.unwrap();

    let adds = (0..20).map(|i| {
        let repo = repo.clone();
        async move { repo.add_contact_to_group(&format!("c{}", i), "g1").await }
    });
    for result in futures::future::join_all(adds).await {
        result.unwrap();
    }

    let group = repo.get_by_id("g1").await.unwrap();
    assert_eq!(group.contact_ids.len(), 20);
}

#[tokio::test]
async fn test_get_all_and_delete_group() {
    let (_contacts, groups, service) = setup();
    let ctx = RequestContext::detached();

    let created = service
        .create_group(&ctx, Group::new("", "Work"))
        .await
        .unwrap();
    assert_eq!(service.get_all_groups(&ctx).await.unwrap(), vec![created.clone()]);
    assert_eq!(
        service.get_group_by_id(&ctx, &created.id).await.unwrap(),
        created
    );

    service.delete_group(&ctx, &created.id).await.unwrap();

    assert!(groups.stored(&created.id).is_none());
    assert!(service
        .delete_group(&ctx, &created.id)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_deleting_contact_leaves_dangling_reference() {
    let contacts = MockContactRepository::new();
    let groups = MockGroupRepository::new();
    contacts.add_contact(Contact::new("c1", "Ada", "a@x"));
    groups.add_group(Group::new("g1", "Friends"));

    let group_service =
        GroupServiceImpl::new(Arc::new(contacts.clone()), Arc::new(groups.clone()));
    let contact_service = ContactServiceImpl::new(Arc::new(contacts.clone()));
    let ctx = RequestContext::detached();

    group_service
        .add_contact_to_group(&ctx, "c1", "g1")
        .await
        .unwrap();
    contact_service.delete_contact(&ctx, "c1").await.unwrap();

    assert_eq!(groups.stored("g1").unwrap().contact_ids, vec!["c1"]);
}
