//! Forum integration tests
//!
//! Exercises the service layer end-to-end over the in-memory backend,
//! plus slice persistence through the JSON file backend.
//!
//! Run with: cargo test -p integration-tests --test forum_tests

use std::sync::Arc;

use integration_tests::{
    comment_report, comment_request, scratch_dir, thread_report, thread_request, unique_username,
    TestForum,
};
use lapau_core::{
    Category, DomainError, ReactionKind, ReportStatus, Thread, ThreadStatus, User, UserLevel,
};
use lapau_service::dto::{FeedItem, RegisterRequest, ReportRequest};
use lapau_service::{seed, ReactionOutcome, ServiceContext, ServiceError};
use lapau_store::JsonFileBackend;
use uuid::Uuid;

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_starts_at_the_bottom_tier() {
    let forum = TestForum::start().await;

    let siti = forum.register("siti").await;
    assert_eq!(siti.username, "siti");
    assert_eq!(siti.total_posts, 0);
    assert_eq!(siti.total_reactions, 0);
    assert_eq!(siti.level, UserLevel::AnakLapau);

    // Registration signs the user in
    let current = forum.auth().current_user().await.unwrap().unwrap();
    assert_eq!(current.id, siti.id);
}

#[tokio::test]
async fn test_duplicate_username_is_refused_without_mutation() {
    let forum = TestForum::start().await;
    forum.register("siti").await;

    let err = forum
        .auth()
        .register(RegisterRequest {
            username: "siti".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::UsernameTaken(_))
    ));

    let users = forum.ctx.user_repo().list().await.unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_login_is_username_lookup_only() {
    let forum = TestForum::start().await;
    forum.register("siti").await;
    forum.auth().logout().await.unwrap();
    assert!(forum.auth().current_user().await.unwrap().is_none());

    // Any password is accepted; only the username matters
    let signed_in = forum
        .auth()
        .login(lapau_service::dto::LoginRequest {
            username: "siti".to_string(),
            password: "indak penting".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(signed_in.username, "siti");

    let err = forum
        .auth()
        .login(lapau_service::dto::LoginRequest {
            username: "urang_asing".to_string(),
            password: String::new(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::UnknownUsername(_))
    ));
}

// ============================================================================
// Thread Tests
// ============================================================================

#[tokio::test]
async fn test_new_threads_wait_for_moderation() {
    let forum = TestForum::start().await;
    let siti = forum.register("siti").await;

    let thread = forum
        .threads()
        .create_thread(siti.id, thread_request("Lamang di pasa", "lapau-umum"))
        .await
        .unwrap();
    assert_eq!(thread.status, ThreadStatus::Pending);
    assert_eq!(thread.comment_count, 0);

    // Pending threads never reach the feed
    let feed = forum
        .feed()
        .compose(lapau_core::CategoryFilter::All, None)
        .await
        .unwrap();
    assert!(feed.is_empty());
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let forum = TestForum::start().await;
    let siti = forum.register("siti").await;

    let err = forum
        .threads()
        .create_thread(siti.id, thread_request("Judul", "gosip-tetangga"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::UnknownCategory(_))
    ));
}

#[tokio::test]
async fn test_unauthenticated_thread_creation_is_refused() {
    let forum = TestForum::start().await;

    let err = forum
        .threads()
        .create_thread(Uuid::new_v4(), thread_request("Judul", "lapau-umum"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_pair_restores_prior_state() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;
    let budi = forum.register("budi").await;
    let thread_id = forum.approved_thread(siti.id, admin.id, "Lamang").await;

    let outcome = forum
        .reactions()
        .toggle(budi.id, thread_id, ReactionKind::Gulai)
        .await
        .unwrap();
    assert_eq!(outcome, ReactionOutcome::Added(ReactionKind::Gulai));

    let outcome = forum
        .reactions()
        .toggle(budi.id, thread_id, ReactionKind::Gulai)
        .await
        .unwrap();
    assert_eq!(outcome, ReactionOutcome::Removed(ReactionKind::Gulai));

    let thread = forum.threads().get_thread(thread_id).await.unwrap();
    assert_eq!(thread.reactions.total(), 0);
    assert_eq!(thread.reactions.kind_of(budi.id), None);
}

#[tokio::test]
async fn test_one_reaction_kind_per_user_per_thread() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;
    let budi = forum.register("budi").await;
    let thread_id = forum.approved_thread(siti.id, admin.id, "Lamang").await;

    for kind in [
        ReactionKind::Rendang,
        ReactionKind::Asin,
        ReactionKind::TehTalua,
    ] {
        forum
            .reactions()
            .toggle(budi.id, thread_id, kind)
            .await
            .unwrap();
    }

    let thread = forum.threads().get_thread(thread_id).await.unwrap();
    assert_eq!(thread.reactions.total(), 1);
    assert_eq!(thread.reactions.kind_of(budi.id), Some(ReactionKind::TehTalua));
}

#[tokio::test]
async fn test_author_cannot_react_to_own_thread() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;
    let thread_id = forum.approved_thread(siti.id, admin.id, "Lamang").await;

    let outcome = forum
        .reactions()
        .toggle(siti.id, thread_id, ReactionKind::Rendang)
        .await
        .unwrap();
    assert_eq!(outcome, ReactionOutcome::Ignored);

    let thread = forum.threads().get_thread(thread_id).await.unwrap();
    assert_eq!(thread.reactions.total(), 0);
}

#[tokio::test]
async fn test_anonymous_author_may_react_to_own_thread() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;

    let mut request = thread_request("Curhat", "curhat-lapau");
    request.is_anonymous = true;
    let thread = forum.threads().create_thread(siti.id, request).await.unwrap();
    forum.moderation().approve(admin.id, thread.id).await.unwrap();

    let outcome = forum
        .reactions()
        .toggle(siti.id, thread.id, ReactionKind::Langkitang)
        .await
        .unwrap();
    assert_eq!(outcome, ReactionOutcome::Added(ReactionKind::Langkitang));

    // Anonymous threads never credit the author's reaction total
    let siti_after = forum.users().get_user(siti.id).await.unwrap();
    assert_eq!(siti_after.total_reactions, 0);
}

#[tokio::test]
async fn test_reaction_credits_author_total_for_that_thread() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;
    let budi = forum.register("budi").await;
    let thread_id = forum.approved_thread(siti.id, admin.id, "Lamang").await;

    forum
        .reactions()
        .toggle(budi.id, thread_id, ReactionKind::Rendang)
        .await
        .unwrap();

    let siti_after = forum.users().get_user(siti.id).await.unwrap();
    assert_eq!(siti_after.total_reactions, 1);
}

#[tokio::test]
async fn test_unknown_reaction_kind_is_rejected() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;
    let budi = forum.register("budi").await;
    let thread_id = forum.approved_thread(siti.id, admin.id, "Lamang").await;

    let err = forum
        .reactions()
        .toggle_named(budi.id, thread_id, "nasi-goreng")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::UnknownReaction(_))
    ));
}

// ============================================================================
// Moderation Tests
// ============================================================================

#[tokio::test]
async fn test_approval_credits_the_author_exactly_once() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;

    let thread = forum
        .threads()
        .create_thread(siti.id, thread_request("Lamang", "lapau-umum"))
        .await
        .unwrap();

    forum.moderation().approve(admin.id, thread.id).await.unwrap();
    let siti_after = forum.users().get_user(siti.id).await.unwrap();
    assert_eq!(siti_after.total_posts, 1);

    // A second approval is refused by the status transition guard
    let err = forum
        .moderation()
        .approve(admin.id, thread.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidStatusTransition { .. })
    ));

    let siti_after = forum.users().get_user(siti.id).await.unwrap();
    assert_eq!(siti_after.total_posts, 1);
}

#[tokio::test]
async fn test_anonymous_approval_leaves_totals_alone() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;

    let mut request = thread_request("Curhat", "curhat-lapau");
    request.is_anonymous = true;
    let thread = forum.threads().create_thread(siti.id, request).await.unwrap();

    forum.moderation().approve(admin.id, thread.id).await.unwrap();

    let siti_after = forum.users().get_user(siti.id).await.unwrap();
    assert_eq!(siti_after.total_posts, 0);
}

#[tokio::test]
async fn test_rejection_keeps_the_note_and_is_terminal() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;

    let thread = forum
        .threads()
        .create_thread(siti.id, thread_request("Kasar", "ota-viral"))
        .await
        .unwrap();

    let rejected = forum
        .moderation()
        .reject(admin.id, thread.id, Some("Indak beradat".to_string()))
        .await
        .unwrap();
    assert_eq!(rejected.status, ThreadStatus::Rejected);
    assert_eq!(rejected.rejection_note.as_deref(), Some("Indak beradat"));

    let err = forum
        .moderation()
        .approve(admin.id, thread.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidStatusTransition { .. })
    ));
}

#[tokio::test]
async fn test_moderation_requires_the_admin_role() {
    let forum = TestForum::start().await;
    let siti = forum.register("siti").await;
    let budi = forum.register("budi").await;

    let thread = forum
        .threads()
        .create_thread(siti.id, thread_request("Lamang", "lapau-umum"))
        .await
        .unwrap();

    let err = forum
        .moderation()
        .approve(budi.id, thread.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::AdminOnly)));
}

#[tokio::test]
async fn test_comment_count_follows_add_and_delete() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;
    let budi = forum.register("budi").await;
    let thread_id = forum.approved_thread(siti.id, admin.id, "Lamang").await;

    let comment = forum
        .comments()
        .add_comment(budi.id, comment_request(thread_id, "Sapakat"))
        .await
        .unwrap();
    let thread = forum.threads().get_thread(thread_id).await.unwrap();
    assert_eq!(thread.comment_count, 1);

    forum
        .moderation()
        .delete_comment(budi.id, comment.id)
        .await
        .unwrap();
    let thread = forum.threads().get_thread(thread_id).await.unwrap();
    assert_eq!(thread.comment_count, 0);

    // A second delete is refused and the count stays floored at zero
    let err = forum
        .moderation()
        .delete_comment(budi.id, comment.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
    let thread = forum.threads().get_thread(thread_id).await.unwrap();
    assert_eq!(thread.comment_count, 0);
}

#[tokio::test]
async fn test_only_author_or_admin_deletes_a_comment() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;
    let budi = forum.register("budi").await;
    let upiak = forum.register("upiak").await;
    let thread_id = forum.approved_thread(siti.id, admin.id, "Lamang").await;

    let comment = forum
        .comments()
        .add_comment(budi.id, comment_request(thread_id, "Sapakat"))
        .await
        .unwrap();

    let err = forum
        .moderation()
        .delete_comment(upiak.id, comment.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::NotCommentAuthor)
    ));

    // The admin may remove it
    forum
        .moderation()
        .delete_comment(admin.id, comment.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reply_must_stay_on_the_same_thread() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;
    let budi = forum.register("budi").await;
    let first = forum.approved_thread(siti.id, admin.id, "Pertamo").await;
    let second = forum.approved_thread(siti.id, admin.id, "Kaduo").await;

    let parent = forum
        .comments()
        .add_comment(budi.id, comment_request(first, "induak"))
        .await
        .unwrap();

    let mut reply = comment_request(second, "balasan sasek");
    reply.parent_id = Some(parent.id);
    let err = forum.comments().add_comment(budi.id, reply).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::ParentCommentMismatch(_))
    ));
}

#[tokio::test]
async fn test_petuah_toggle_is_admin_only() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;
    let budi = forum.register("budi").await;
    let thread_id = forum.approved_thread(siti.id, admin.id, "Lamang").await;

    let comment = forum
        .comments()
        .add_comment(budi.id, comment_request(thread_id, "Elok-elok di rantau"))
        .await
        .unwrap();

    let err = forum
        .moderation()
        .mark_petuah(budi.id, comment.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::AdminOnly)));

    assert!(forum.moderation().mark_petuah(admin.id, comment.id).await.unwrap());
    assert!(!forum.moderation().mark_petuah(admin.id, comment.id).await.unwrap());
}

// ============================================================================
// Report Tests
// ============================================================================

#[tokio::test]
async fn test_acting_on_content_closes_its_reports() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;
    let budi = forum.register("budi").await;

    let thread = forum
        .threads()
        .create_thread(siti.id, thread_request("Dicurigai", "ota-viral"))
        .await
        .unwrap();
    forum
        .moderation()
        .report(budi.id, thread_report(thread.id))
        .await
        .unwrap();

    forum.moderation().approve(admin.id, thread.id).await.unwrap();

    let reports = forum.moderation().list_reports(admin.id).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].status, ReportStatus::Reviewed);
}

#[tokio::test]
async fn test_deleting_a_comment_closes_its_reports() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;
    let budi = forum.register("budi").await;
    let thread_id = forum.approved_thread(siti.id, admin.id, "Lamang").await;

    let comment = forum
        .comments()
        .add_comment(budi.id, comment_request(thread_id, "kasar bana"))
        .await
        .unwrap();
    forum
        .moderation()
        .report(siti.id, comment_report(comment.id))
        .await
        .unwrap();

    forum
        .moderation()
        .delete_comment(admin.id, comment.id)
        .await
        .unwrap();

    let reports = forum.moderation().list_reports(admin.id).await.unwrap();
    assert_eq!(reports[0].status, ReportStatus::Reviewed);
}

#[tokio::test]
async fn test_report_needs_exactly_one_target() {
    let forum = TestForum::start().await;
    let siti = forum.register("siti").await;

    let err = forum
        .moderation()
        .report(
            siti.id,
            ReportRequest {
                thread_id: None,
                comment_id: None,
                reason: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

// ============================================================================
// Feed Tests
// ============================================================================

/// Build an approved thread directly in the repository
async fn seeded_thread(
    ctx: &ServiceContext,
    author: &User,
    title: &str,
    category: Category,
    comments: u32,
    reactions: usize,
) -> Thread {
    let mut thread = Thread::new(
        ctx.generate_id(),
        author,
        title.to_string(),
        format!("isi dari {title}"),
        category,
        false,
    );
    thread.approve().unwrap();
    for _ in 0..comments {
        thread.record_comment_added();
    }
    for _ in 0..reactions {
        thread.reactions.toggle(Uuid::new_v4(), ReactionKind::TehTalua);
    }
    ctx.thread_repo().create(&thread).await.unwrap();
    thread
}

#[tokio::test]
async fn test_feed_shows_only_approved_threads() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;

    forum.approved_thread(siti.id, admin.id, "Lulus").await;
    let pending = forum
        .threads()
        .create_thread(siti.id, thread_request("Antri", "lapau-umum"))
        .await
        .unwrap();
    let rejected = forum
        .threads()
        .create_thread(siti.id, thread_request("Tolak", "lapau-umum"))
        .await
        .unwrap();
    forum
        .moderation()
        .reject(admin.id, rejected.id, None)
        .await
        .unwrap();

    let feed = forum
        .feed()
        .compose(lapau_core::CategoryFilter::All, None)
        .await
        .unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].title, "Lulus");
    assert!(feed.iter().all(|t| t.status == ThreadStatus::Approved));
    assert!(feed.iter().all(|t| t.id != pending.id));
}

#[tokio::test]
async fn test_search_bypasses_the_category_filter() {
    let forum = TestForum::start().await;
    let siti = forum.register("siti").await;
    let author = forum.ctx.user_repo().find_by_id(siti.id).await.unwrap().unwrap();

    seeded_thread(&forum.ctx, &author, "Lamang di pasa", Category::LapauUmum, 0, 0).await;
    seeded_thread(&forum.ctx, &author, "Politik jo lamang", Category::PolitikLapau, 0, 0).await;

    // Searching while a category is selected still matches every category
    let results = forum
        .feed()
        .compose(
            lapau_core::CategoryFilter::Only(Category::LapauUmum),
            Some("LAMANG"),
        )
        .await
        .unwrap();
    assert_eq!(results.len(), 2);

    // Without a query the category filter applies
    let results = forum
        .feed()
        .compose(lapau_core::CategoryFilter::Only(Category::LapauUmum), None)
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].category, Category::LapauUmum);
}

#[tokio::test]
async fn test_trending_orders_by_weighted_score() {
    let forum = TestForum::start().await;
    let siti = forum.register("siti").await;
    let author = forum.ctx.user_repo().find_by_id(siti.id).await.unwrap().unwrap();

    // Scores: 10*2+0=20, 0*2+25=25, 3*2+4=10
    seeded_thread(&forum.ctx, &author, "rami komentar", Category::LapauUmum, 10, 0).await;
    seeded_thread(&forum.ctx, &author, "rami reaksi", Category::LapauUmum, 0, 25).await;
    seeded_thread(&forum.ctx, &author, "biaso se", Category::LapauUmum, 3, 4).await;

    let trending = forum.feed().trending().await.unwrap();
    let titles: Vec<&str> = trending.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["rami reaksi", "rami komentar", "biaso se"]);
}

#[tokio::test]
async fn test_trending_keeps_at_most_five() {
    let forum = TestForum::start().await;
    let siti = forum.register("siti").await;
    let author = forum.ctx.user_repo().find_by_id(siti.id).await.unwrap().unwrap();

    for i in 0..7 {
        seeded_thread(
            &forum.ctx,
            &author,
            &format!("thread {i}"),
            Category::LapauUmum,
            i,
            0,
        )
        .await;
    }

    let trending = forum.feed().trending().await.unwrap();
    assert_eq!(trending.len(), 5);
}

// ============================================================================
// Advertisement Tests
// ============================================================================

async fn seeded_ad(
    ctx: &ServiceContext,
    title: &str,
    placement: lapau_core::AdPlacement,
) -> lapau_core::Advertisement {
    let ad = lapau_core::Advertisement::new(
        ctx.generate_id(),
        title.to_string(),
        format!("iklan {title}"),
        placement,
    );
    ctx.ad_repo().create(&ad).await.unwrap();
    ad
}

#[tokio::test]
async fn test_ads_land_after_the_third_and_sixth_items() {
    let forum = TestForum::start().await;
    let siti = forum.register("siti").await;
    let author = forum.ctx.user_repo().find_by_id(siti.id).await.unwrap().unwrap();

    for i in 0..7 {
        seeded_thread(
            &forum.ctx,
            &author,
            &format!("thread {i}"),
            Category::LapauUmum,
            0,
            0,
        )
        .await;
    }
    seeded_ad(&forum.ctx, "iklan ciek", lapau_core::AdPlacement::BetweenThreads).await;
    seeded_ad(&forum.ctx, "iklan duo", lapau_core::AdPlacement::BetweenThreads).await;
    seeded_ad(&forum.ctx, "sidebar", lapau_core::AdPlacement::Sidebar).await;

    let items = forum
        .feed()
        .compose_with_ads(lapau_core::CategoryFilter::All, None)
        .await
        .unwrap();

    assert_eq!(items.len(), 9);
    assert!(matches!(&items[3], FeedItem::Ad(ad) if ad.title == "iklan ciek"));
    assert!(matches!(&items[7], FeedItem::Ad(ad) if ad.title == "iklan duo"));
    let ad_count = items
        .iter()
        .filter(|item| matches!(item, FeedItem::Ad(_)))
        .count();
    assert_eq!(ad_count, 2);
}

#[tokio::test]
async fn test_short_feeds_drop_the_second_slot() {
    let forum = TestForum::start().await;
    let siti = forum.register("siti").await;
    let author = forum.ctx.user_repo().find_by_id(siti.id).await.unwrap().unwrap();

    for i in 0..5 {
        seeded_thread(
            &forum.ctx,
            &author,
            &format!("thread {i}"),
            Category::LapauUmum,
            0,
            0,
        )
        .await;
    }
    seeded_ad(&forum.ctx, "iklan ciek", lapau_core::AdPlacement::BetweenThreads).await;
    seeded_ad(&forum.ctx, "iklan duo", lapau_core::AdPlacement::BetweenThreads).await;

    let items = forum
        .feed()
        .compose_with_ads(lapau_core::CategoryFilter::All, None)
        .await
        .unwrap();

    // Five threads only reach index 4, so the second slot never fires
    assert_eq!(items.len(), 6);
    assert!(matches!(&items[3], FeedItem::Ad(ad) if ad.title == "iklan ciek"));
}

#[tokio::test]
async fn test_sidebar_lists_only_sidebar_ads() {
    let forum = TestForum::start().await;
    seeded_ad(&forum.ctx, "samping", lapau_core::AdPlacement::Sidebar).await;
    seeded_ad(&forum.ctx, "tangah", lapau_core::AdPlacement::BetweenThreads).await;

    let sidebar = forum.feed().sidebar_ads().await.unwrap();
    assert_eq!(sidebar.len(), 1);
    assert_eq!(sidebar[0].title, "samping");
}

#[tokio::test]
async fn test_click_through_counter() {
    let forum = TestForum::start().await;
    let ad = seeded_ad(&forum.ctx, "samping", lapau_core::AdPlacement::Sidebar).await;

    assert_eq!(forum.ads().record_click(ad.id).await.unwrap(), 1);
    assert_eq!(forum.ads().record_click(ad.id).await.unwrap(), 2);

    let err = forum.ads().record_click(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
}

// ============================================================================
// Awards Tests
// ============================================================================

#[tokio::test]
async fn test_empty_forum_has_no_winners() {
    let forum = TestForum::start().await;
    let awards = forum.awards().compute().await.unwrap();

    assert!(awards.most_active_thread.is_none());
    assert!(awards.top_rendang_user.is_none());
    assert!(awards.wisest_commenter.is_none());
    assert!(awards.most_controversial_thread.is_none());
}

#[tokio::test]
async fn test_awards_pick_the_expected_winners() {
    let forum = TestForum::start().await;
    let admin = forum.create_admin(&unique_username("datuak")).await;
    let siti = forum.register("siti").await;
    let budi = forum.register("budi").await;
    let siti_entity = forum.ctx.user_repo().find_by_id(siti.id).await.unwrap().unwrap();
    let budi_entity = forum.ctx.user_repo().find_by_id(budi.id).await.unwrap().unwrap();

    // siti: many comments and rendang; budi: the spicy one
    let mut rami = seeded_thread(&forum.ctx, &siti_entity, "rami", Category::LapauUmum, 4, 0).await;
    rami.reactions.toggle(Uuid::new_v4(), ReactionKind::Rendang);
    rami.reactions.toggle(Uuid::new_v4(), ReactionKind::Rendang);
    forum.ctx.thread_repo().update(&rami).await.unwrap();

    let mut padeh = seeded_thread(&forum.ctx, &budi_entity, "padeh", Category::OtaViral, 0, 0).await;
    padeh.reactions.toggle(Uuid::new_v4(), ReactionKind::Asin);
    padeh.reactions.toggle(Uuid::new_v4(), ReactionKind::SambaLado);
    padeh.reactions.toggle(Uuid::new_v4(), ReactionKind::SambaLado);
    forum.ctx.thread_repo().update(&padeh).await.unwrap();

    // budi earns two petuah badges
    for content in ["elok-elok di rantau", "raso jo pareso"] {
        let comment = forum
            .comments()
            .add_comment(budi.id, comment_request(rami.id, content))
            .await
            .unwrap();
        forum.moderation().mark_petuah(admin.id, comment.id).await.unwrap();
    }

    let awards = forum.awards().compute().await.unwrap();

    let most_active = awards.most_active_thread.unwrap();
    assert_eq!(most_active.title, "rami");

    let top_rendang = awards.top_rendang_user.unwrap();
    assert_eq!(top_rendang.user_id, siti.id);
    assert_eq!(top_rendang.count, 2);

    let wisest = awards.wisest_commenter.unwrap();
    assert_eq!(wisest.user_id, budi.id);
    assert_eq!(wisest.count, 2);

    let controversial = awards.most_controversial_thread.unwrap();
    assert_eq!(controversial.title, "padeh");
    assert_eq!(controversial.count, 3);
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_slices_survive_a_restart() {
    let dir = scratch_dir();
    let backend = Arc::new(JsonFileBackend::new(dir.clone(), false));

    {
        let ctx = ServiceContext::open(backend).await.unwrap();
        let forum = TestForum { ctx };
        let siti = forum.register("siti").await;
        forum
            .threads()
            .create_thread(siti.id, thread_request("Tahan lamo", "lapau-umum"))
            .await
            .unwrap();
    }

    let backend = Arc::new(JsonFileBackend::new(dir, false));
    let ctx = ServiceContext::open(backend).await.unwrap();
    let forum = TestForum { ctx };

    let users = forum.ctx.user_repo().list().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "siti");

    let threads = forum.ctx.thread_repo().list().await.unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].title, "Tahan lamo");
    assert_eq!(threads[0].status, ThreadStatus::Pending);

    // The session slice came back too
    let current = forum.auth().current_user().await.unwrap().unwrap();
    assert_eq!(current.username, "siti");
}

// ============================================================================
// Seeding Tests
// ============================================================================

#[tokio::test]
async fn test_seed_runs_once_and_stays_consistent() {
    let forum = TestForum::start().await;

    assert!(seed::seed_if_empty(&forum.ctx).await.unwrap());
    assert!(!seed::seed_if_empty(&forum.ctx).await.unwrap());

    let users = forum.ctx.user_repo().list().await.unwrap();
    let threads = forum.ctx.thread_repo().list().await.unwrap();
    let comments = forum.ctx.comment_repo().list().await.unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(threads.len(), 3);

    // Every denormalized counter matches the comment collection
    for thread in &threads {
        let live = comments.iter().filter(|c| c.thread_id == thread.id).count();
        assert_eq!(thread.comment_count as usize, live);
    }

    // The seeded author totals reflect the seeded reactions and posts
    let siti = forum
        .ctx
        .user_repo()
        .find_by_username("siti")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(siti.total_posts, 1);
    assert_eq!(siti.total_reactions, 1);
}
