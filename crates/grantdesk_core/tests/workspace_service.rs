use grantdesk_core::{
    AccessError, Activity, DepartmentSubscription, EntityType, MemberRole, SidebarEntry,
    SubscriptionPlan, SubscriptionStatus, Viewer, WorkspaceSection, WorkspaceService,
};
use uuid::Uuid;

fn active() -> Option<DepartmentSubscription> {
    Some(DepartmentSubscription::new(
        SubscriptionPlan::Standard,
        SubscriptionStatus::Active,
    ))
}

fn service(roles: &[MemberRole], subscription: Option<DepartmentSubscription>) -> WorkspaceService {
    WorkspaceService::new(
        Viewer::new(Uuid::new_v4(), roles.iter().copied()),
        subscription,
    )
}

#[test]
fn feed_is_newest_first_and_filtered() {
    let service = service(&[MemberRole::Researcher], active());
    let activities = vec![
        Activity::new(EntityType::Document, "old upload", 100),
        Activity::new(EntityType::Budget, "hidden budget", 300),
        Activity::new(EntityType::Milestone, "new milestone", 200),
        Activity::new(EntityType::Deliverable, "tie a", 150),
        Activity::new(EntityType::Deliverable, "tie b", 150),
    ];

    let feed = service.activity_feed(&activities, None);
    let descriptions: Vec<&str> = feed.iter().map(|a| a.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec!["new milestone", "tie a", "tie b", "old upload"]
    );
}

#[test]
fn feed_respects_limit() {
    let service = service(&[MemberRole::PrincipalInvestigator], active());
    let activities: Vec<Activity> = (0..30)
        .map(|index| Activity::new(EntityType::Document, format!("doc {index}"), index))
        .collect();

    assert_eq!(service.activity_feed(&activities, None).len(), 20);
    assert_eq!(service.activity_feed(&activities, Some(0)).len(), 20);
    let top = service.activity_feed(&activities, Some(3));
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].description, "doc 29");
}

#[test]
fn sidebar_locks_premium_sections_without_active_subscription() {
    let service = service(&[MemberRole::FinanceOfficer], None);
    let sidebar = service.sidebar(&WorkspaceSection::ALL);
    assert_eq!(
        sidebar,
        vec![
            SidebarEntry {
                section: WorkspaceSection::Dashboard,
                locked: false,
            },
            SidebarEntry {
                section: WorkspaceSection::BudgetTracker,
                locked: true,
            },
            SidebarEntry {
                section: WorkspaceSection::Documents,
                locked: true,
            },
        ]
    );
}

#[test]
fn sidebar_unlocks_with_active_subscription() {
    let service = service(&[MemberRole::Reviewer], active());
    let sidebar = service.sidebar(&WorkspaceSection::ALL);
    assert_eq!(sidebar.len(), WorkspaceSection::ALL.len());
    assert!(sidebar.iter().all(|entry| !entry.locked));
}

#[test]
fn open_section_reports_hidden_before_locked() {
    let inactive = Some(DepartmentSubscription::new(
        SubscriptionPlan::Free,
        SubscriptionStatus::Inactive,
    ));
    let service = service(&[MemberRole::Researcher], inactive);

    let err = service
        .open_section(WorkspaceSection::BudgetTracker)
        .expect_err("researchers cannot open the budget tracker");
    assert_eq!(err, AccessError::SectionHidden(WorkspaceSection::BudgetTracker));

    let err = service
        .open_section(WorkspaceSection::Milestones)
        .expect_err("milestones are premium");
    assert!(matches!(err, AccessError::PremiumLocked { .. }));
    assert!(err.to_string().starts_with("Milestones is a premium feature."));

    service
        .open_section(WorkspaceSection::Dashboard)
        .expect("dashboard is always open");
}

#[test]
fn principal_investigator_opens_settings() {
    let service = service(&[MemberRole::PrincipalInvestigator], None);
    service
        .open_section(WorkspaceSection::Settings)
        .expect("settings is not premium");
    assert!(!service.premium_unlocked());
}
