//! Engagement engine tests
//!
//! Run the services against in-memory stores, including concurrent callers
//! and outages of the secondary stores.
//!
//! Run with: cargo test -p integration-tests --test engagement_tests

use std::sync::Arc;

use futures::future::join_all;
use integration_tests::{
    relink, retitle, submit_request, submit_request_with_links, TestHarness, VIEW_SEED,
};
use techdaily_common::EngagementConfig;
use techdaily_core::error::DomainError;
use techdaily_core::traits::PageRequest;
use techdaily_core::value_objects::{ArticleId, ReviewStatus, UserId, VoteAction, VoteStatus};
use techdaily_service::dto::EditArticleRequest;
use techdaily_service::{
    ArticleService, QueryService, ReviewService, ServiceError, SubmissionService,
    SyncCoordinator, VoteService,
};

fn domain(err: &ServiceError) -> &DomainError {
    err.as_domain().expect("domain error")
}

// ============================================================================
// Votes
// ============================================================================

#[tokio::test]
async fn test_vote_scenario() {
    let h = TestHarness::new();
    let author = h.user();
    let voter = h.user();
    let article = h.published_article(&author).await;
    let votes = VoteService::new(&h.ctx);

    let r = votes.vote(article.id, voter.id, VoteAction::Up).await.unwrap();
    assert_eq!((r.status, r.stars, r.un_stars), (VoteStatus::Up, 1, 0));
    assert_eq!(r.label, "Starred");

    // Repeating the same stance changes nothing
    let r = votes.vote(article.id, voter.id, VoteAction::Up).await.unwrap();
    assert_eq!((r.status, r.stars, r.un_stars), (VoteStatus::Up, 1, 0));
    assert_eq!(r.label, "Unchanged");

    let r = votes.vote(article.id, voter.id, VoteAction::Down).await.unwrap();
    assert_eq!((r.status, r.stars, r.un_stars), (VoteStatus::Down, 0, 1));

    let r = votes.vote(article.id, voter.id, VoteAction::Clear).await.unwrap();
    assert_eq!((r.status, r.stars, r.un_stars), (VoteStatus::Neutral, 0, 0));
    assert_eq!(r.label, "Un-star removed");

    assert_eq!(
        votes.vote_status(voter.id, article.id).await.unwrap(),
        VoteStatus::Neutral
    );
}

#[tokio::test]
async fn test_vote_projects_counters_to_search() {
    let h = TestHarness::new();
    let author = h.user();
    let article = h.published_article(&author).await;

    VoteService::new(&h.ctx)
        .vote(article.id, h.user().id, VoteAction::Down)
        .await
        .unwrap();

    let doc = h.search.document(article.id).expect("projected");
    assert_eq!((doc.stars, doc.un_stars), (0, 1));
}

#[tokio::test]
async fn test_vote_on_missing_article() {
    let h = TestHarness::new();
    let voter = h.user();

    let err = VoteService::new(&h.ctx)
        .vote(ArticleId::new(9999), voter.id, VoteAction::Up)
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::ArticleNotFound(_)));
    assert_eq!(err.status_code(), 404);
    assert_eq!(h.records.votes_on(ArticleId::new(9999)), 0);
}

#[tokio::test]
async fn test_vote_by_unregistered_user_is_counted() {
    let h = TestHarness::new();
    let author = h.user();
    let article = h.published_article(&author).await;
    let stranger = UserId::new(987_654_321);
    let votes = VoteService::new(&h.ctx);

    let r = votes.vote(article.id, stranger, VoteAction::Up).await.unwrap();
    assert_eq!((r.status, r.stars), (VoteStatus::Up, 1));
    assert_eq!(votes.vote_status(stranger, article.id).await.unwrap(), VoteStatus::Up);
}

#[tokio::test]
async fn test_vote_status_without_row_is_neutral() {
    let h = TestHarness::new();

    let status = VoteService::new(&h.ctx)
        .vote_status(UserId::new(1), ArticleId::new(1))
        .await
        .unwrap();

    assert_eq!(status, VoteStatus::Neutral);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_votes_by_many_users() {
    let h = Arc::new(TestHarness::new());
    let author = h.user();
    let article = h.published_article(&author).await;
    let up_voters: Vec<_> = (0..12).map(|_| h.user()).collect();
    let down_voters: Vec<_> = (0..5).map(|_| h.user()).collect();
    let article_id = article.id;

    let mut handles = Vec::new();
    for (user, action) in up_voters
        .iter()
        .map(|u| (u.id, VoteAction::Up))
        .chain(down_voters.iter().map(|u| (u.id, VoteAction::Down)))
    {
        let h = h.clone();
        handles.push(tokio::spawn(async move {
            VoteService::new(&h.ctx).vote(article_id, user, action).await
        }));
    }
    for result in join_all(handles).await {
        result.unwrap().unwrap();
    }

    let stored = h.records.article(article.id).unwrap();
    assert_eq!((stored.stars, stored.un_stars), (12, 5));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_votes_by_one_user_stay_consistent() {
    let h = Arc::new(TestHarness::new());
    let author = h.user();
    let voter_id = h.user().id;
    let article_id = h.published_article(&author).await.id;

    let actions = [
        VoteAction::Up,
        VoteAction::Down,
        VoteAction::Clear,
        VoteAction::Up,
        VoteAction::Down,
        VoteAction::Up,
        VoteAction::Clear,
        VoteAction::Down,
    ];
    let handles: Vec<_> = actions
        .into_iter()
        .cycle()
        .take(40)
        .map(|action| {
            let h = h.clone();
            tokio::spawn(async move {
                VoteService::new(&h.ctx).vote(article_id, voter_id, action).await
            })
        })
        .collect();
    for result in join_all(handles).await {
        let response = result.unwrap().unwrap();
        assert!(response.stars >= 0 && response.un_stars >= 0);
    }

    // Whatever the interleaving, the counters agree with the final stance
    let stored = h.records.article(article_id).unwrap();
    let status = VoteService::new(&h.ctx)
        .vote_status(voter_id, article_id)
        .await
        .unwrap();
    let expected = match status {
        VoteStatus::Up => (1, 0),
        VoteStatus::Down => (0, 1),
        VoteStatus::Neutral => (0, 0),
    };
    assert_eq!((stored.stars, stored.un_stars), expected);
}

// ============================================================================
// Submission and quota
// ============================================================================

#[tokio::test]
async fn test_submission_enters_review_and_is_indexed() {
    let h = TestHarness::new();
    let author = h.user();
    let request = submit_request();
    let link = request.link.clone();

    let article = SubmissionService::new(&h.ctx)
        .submit(author.id, request)
        .await
        .unwrap();

    assert_eq!(article.review_status, ReviewStatus::Pending);
    assert_eq!((article.stars, article.un_stars, article.views), (0, 0, 0));
    assert_eq!(article.md_content, Some(format!("# Fetched from {link}")));
    assert!(article.shortened_link.is_some());
    assert_eq!(h.quota.count(author.id), 1);

    let doc = h.search.document(article.id).expect("indexed");
    assert_eq!(doc.review_status, ReviewStatus::Pending);
    assert_eq!(doc.title, article.title);
}

#[tokio::test]
async fn test_second_submission_hits_daily_limit() {
    let h = TestHarness::new();
    let author = h.user();
    let submissions = SubmissionService::new(&h.ctx);

    submissions.submit(author.id, submit_request()).await.unwrap();
    let err = submissions
        .submit(author.id, submit_request())
        .await
        .unwrap_err();

    assert!(matches!(
        domain(&err),
        DomainError::SubmissionLimitExceeded { limit: 1, .. }
    ));
    assert_eq!(err.status_code(), 429);
    assert_eq!(h.records.article_count(), 1);
}

#[tokio::test]
async fn test_admin_submission_is_published_without_quota() {
    let h = TestHarness::new();
    let admin = h.admin();
    let submissions = SubmissionService::new(&h.ctx);

    for _ in 0..3 {
        let article = submissions.submit(admin.id, submit_request()).await.unwrap();
        assert_eq!(article.review_status, ReviewStatus::Approved);
        assert_eq!(
            h.search.document(article.id).unwrap().review_status,
            ReviewStatus::Approved
        );
    }
    assert_eq!(h.quota.count(admin.id), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submissions_respect_limit() {
    let policy = EngagementConfig {
        submission_daily_limit: 3,
        ..EngagementConfig::default()
    };
    let h = Arc::new(TestHarness::with_policy(policy));
    let author_id = h.user().id;

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let h = h.clone();
            tokio::spawn(async move {
                SubmissionService::new(&h.ctx)
                    .submit(author_id, submit_request())
                    .await
            })
        })
        .collect();

    let mut admitted = 0;
    let mut limited = 0;
    for result in join_all(handles).await {
        match result.unwrap() {
            Ok(_) => admitted += 1,
            Err(e) if e.status_code() == 429 => limited += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!((admitted, limited), (3, 7));
    assert_eq!(h.records.article_count(), 3);
    assert_eq!(h.quota.count(author_id), 3);
}

#[tokio::test]
async fn test_invalid_link_consumes_no_quota() {
    let h = TestHarness::new();
    let author = h.user();
    let submissions = SubmissionService::new(&h.ctx);

    let err = submissions
        .submit(
            author.id,
            submit_request_with_links("not-a-url", "https://cdn.example.com/a.png"),
        )
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::InvalidLink(_)));
    assert_eq!(err.error_code(), "UPLOAD_LINK_ERROR");
    assert_eq!(h.quota.count(author.id), 0);

    // The daily slot is still available
    submissions.submit(author.id, submit_request()).await.unwrap();
}

#[tokio::test]
async fn test_unknown_contributor_is_rejected() {
    let h = TestHarness::new();

    let err = SubmissionService::new(&h.ctx)
        .submit(UserId::new(4242), submit_request())
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::InvalidUser(_)));
    assert_eq!(h.records.article_count(), 0);
}

#[tokio::test]
async fn test_failed_insert_refunds_quota() {
    let h = TestHarness::new();
    let author = h.user();
    let submissions = SubmissionService::new(&h.ctx);

    h.records.fail_inserts(true);
    let err = submissions
        .submit(author.id, submit_request())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 500);
    assert_eq!(h.quota.count(author.id), 0);

    h.records.fail_inserts(false);
    submissions.submit(author.id, submit_request()).await.unwrap();
    assert_eq!(h.quota.count(author.id), 1);
}

#[tokio::test]
async fn test_cache_outage_admits_submission() {
    let h = TestHarness::new();
    let author = h.user();
    h.quota.set_unavailable(true);

    let article = SubmissionService::new(&h.ctx)
        .submit(author.id, submit_request())
        .await
        .unwrap();

    assert_eq!(article.review_status, ReviewStatus::Pending);
    assert!(h.records.article(article.id).is_some());
}

#[tokio::test]
async fn test_search_outage_does_not_fail_submission() {
    let h = TestHarness::new();
    let author = h.user();
    h.search.set_unavailable(true);

    let article = SubmissionService::new(&h.ctx)
        .submit(author.id, submit_request())
        .await
        .unwrap();

    assert!(h.records.article(article.id).is_some());
    assert!(h.search.document(article.id).is_none());

    // The next successful projection catches the index up
    h.search.set_unavailable(false);
    ArticleService::new(&h.ctx)
        .record_view(article.id)
        .await
        .unwrap();
    assert_eq!(h.search.document(article.id).unwrap().views, 1);
}

// ============================================================================
// Editing
// ============================================================================

#[tokio::test]
async fn test_contributor_edit_returns_to_review() {
    let h = TestHarness::new();
    let author = h.user();
    let article = h.published_article(&author).await;

    let edited = SubmissionService::new(&h.ctx)
        .edit(article.id, author.id, retitle("A better title"))
        .await
        .unwrap();

    assert_eq!(edited.title, "A better title");
    assert_eq!(edited.review_status, ReviewStatus::Pending);
    assert!(edited.submitted_at >= article.submitted_at);
    assert_eq!(h.search.document(article.id).unwrap().title, "A better title");
    // Title-only edits leave the enrichment alone
    assert!(h.enricher.calls().is_empty());
}

#[tokio::test]
async fn test_edit_with_new_link_is_enriched() {
    let h = TestHarness::new();
    let author = h.user();
    let article = h.published_article(&author).await;

    let edited = SubmissionService::new(&h.ctx)
        .edit(article.id, author.id, relink("https://blog.example.com/moved"))
        .await
        .unwrap();

    assert_eq!(edited.link, "https://blog.example.com/moved");
    assert_eq!(
        edited.md_content.as_deref(),
        Some("# Fetched from https://blog.example.com/moved")
    );
    assert_eq!(h.enricher.calls(), vec!["https://blog.example.com/moved"]);
}

#[tokio::test]
async fn test_admin_edit_publishes() {
    let h = TestHarness::new();
    let author = h.user();
    let admin = h.admin();
    let article = h.published_article(&author).await;

    let edited = SubmissionService::new(&h.ctx)
        .edit(article.id, admin.id, retitle("Edited by staff"))
        .await
        .unwrap();

    assert_eq!(edited.review_status, ReviewStatus::Approved);
}

#[tokio::test]
async fn test_stranger_cannot_edit() {
    let h = TestHarness::new();
    let author = h.user();
    let stranger = h.user();
    let article = h.published_article(&author).await;

    let err = SubmissionService::new(&h.ctx)
        .edit(article.id, stranger.id, retitle("Hijacked"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(h.records.article(article.id).unwrap().title, article.title);
}

#[tokio::test]
async fn test_edit_keeps_vote_counters() {
    let h = TestHarness::new();
    let author = h.user();
    let article = h.published_article(&author).await;
    VoteService::new(&h.ctx)
        .vote(article.id, h.user().id, VoteAction::Up)
        .await
        .unwrap();

    let edited = SubmissionService::new(&h.ctx)
        .edit(article.id, author.id, retitle("Still starred"))
        .await
        .unwrap();

    assert_eq!(edited.stars, 1);
}

// ============================================================================
// Review
// ============================================================================

#[tokio::test]
async fn test_admin_review_decisions() {
    let h = TestHarness::new();
    let author = h.user();
    let admin = h.admin();
    let article = SubmissionService::new(&h.ctx)
        .submit(author.id, submit_request())
        .await
        .unwrap();
    let reviews = ReviewService::new(&h.ctx);

    let pending = reviews
        .queue(admin.id, ReviewStatus::Pending, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);

    let approved = reviews.decide(admin.id, article.id, true).await.unwrap();
    assert_eq!(approved.review_status, ReviewStatus::Approved);
    assert!(approved.reviewed_at.is_some());
    assert_eq!(
        h.search.document(article.id).unwrap().review_status,
        ReviewStatus::Approved
    );

    // Decisions can be revisited
    let rejected = reviews.decide(admin.id, article.id, false).await.unwrap();
    assert_eq!(rejected.review_status, ReviewStatus::Rejected);
}

#[tokio::test]
async fn test_review_keeps_edit_made_after_queue_read() {
    let h = TestHarness::new();
    let author = h.user();
    let admin = h.admin();
    let article = SubmissionService::new(&h.ctx)
        .submit(author.id, submit_request())
        .await
        .unwrap();
    let reviews = ReviewService::new(&h.ctx);

    let queued = reviews
        .queue(admin.id, ReviewStatus::Pending, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(queued[0].title, article.title);

    // The author edits after the reviewer saw the queue
    let edit = EditArticleRequest {
        title: Some("EDITED TITLE".to_string()),
        link: Some("https://blog.example.com/edited".to_string()),
        ..Default::default()
    };
    SubmissionService::new(&h.ctx)
        .edit(article.id, author.id, edit)
        .await
        .unwrap();

    let approved = reviews.decide(admin.id, queued[0].id, true).await.unwrap();
    assert_eq!(approved.review_status, ReviewStatus::Approved);
    assert_eq!(approved.title, "EDITED TITLE");
    assert_eq!(approved.link, "https://blog.example.com/edited");

    let stored = h.records.article(article.id).unwrap();
    assert_eq!(stored.title, "EDITED TITLE");
    assert_eq!(stored.link, "https://blog.example.com/edited");
    let doc = h.search.document(article.id).unwrap();
    assert_eq!((doc.title.as_str(), doc.review_status), ("EDITED TITLE", ReviewStatus::Approved));
}

#[tokio::test]
async fn test_non_admin_review_is_denied() {
    let h = TestHarness::new();
    let author = h.user();
    let article = SubmissionService::new(&h.ctx)
        .submit(author.id, submit_request())
        .await
        .unwrap();
    let reviews = ReviewService::new(&h.ctx);

    let err = reviews.decide(author.id, article.id, true).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::PermissionDenied(_)));
    assert_eq!(
        h.records.article(article.id).unwrap().review_status,
        ReviewStatus::Pending
    );

    let err = reviews
        .queue(author.id, ReviewStatus::Pending, PageRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
}

#[tokio::test]
async fn test_review_of_missing_article() {
    let h = TestHarness::new();
    let admin = h.admin();

    let err = ReviewService::new(&h.ctx)
        .decide(admin.id, ArticleId::new(77), true)
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::ArticleNotFound(_)));
}

// ============================================================================
// Deletion and views
// ============================================================================

#[tokio::test]
async fn test_delete_cascades() {
    let h = TestHarness::new();
    let author = h.user();
    let article = SubmissionService::new(&h.ctx)
        .submit(author.id, submit_request())
        .await
        .unwrap();
    let votes = VoteService::new(&h.ctx);
    votes.vote(article.id, h.user().id, VoteAction::Up).await.unwrap();
    votes.vote(article.id, h.user().id, VoteAction::Down).await.unwrap();
    h.records.add_comments(article.id, 4);

    ArticleService::new(&h.ctx).delete(article.id).await.unwrap();

    assert!(h.records.article(article.id).is_none());
    assert_eq!(h.records.votes_on(article.id), 0);
    assert_eq!(h.records.comments_on(article.id), 0);
    assert!(h.search.document(article.id).is_none());

    let err = votes
        .vote(article.id, author.id, VoteAction::Up)
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::ArticleNotFound(_)));

    let err = QueryService::new(&h.ctx)
        .search_document(article.id)
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::ArticleNotFound(_)));

    let err = ArticleService::new(&h.ctx)
        .delete(article.id)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_delete_survives_search_outage() {
    let h = TestHarness::new();
    let author = h.user();
    let article = h.published_article(&author).await;
    h.search.set_unavailable(true);

    ArticleService::new(&h.ctx).delete(article.id).await.unwrap();

    assert!(h.records.article(article.id).is_none());
}

#[tokio::test]
async fn test_record_view_counts_daily_total() {
    let h = TestHarness::new();
    let author = h.user();
    let article = h.published_article(&author).await;
    let articles = ArticleService::new(&h.ctx);

    articles.record_view(article.id).await.unwrap();
    let viewed = articles.record_view(article.id).await.unwrap();

    assert_eq!(viewed.views, 2);
    assert_eq!(articles.daily_total_views().await.unwrap(), VIEW_SEED + 2);
}

#[tokio::test]
async fn test_view_counter_outage() {
    let h = TestHarness::new();
    let author = h.user();
    let article = h.published_article(&author).await;
    let articles = ArticleService::new(&h.ctx);
    h.views.set_unavailable(true);

    // Counting still lands in the record store
    let viewed = articles.record_view(article.id).await.unwrap();
    assert_eq!(viewed.views, 1);

    let err = articles.daily_total_views().await.unwrap_err();
    assert_eq!(err.status_code(), 503);
}

#[tokio::test]
async fn test_late_projection_carries_current_counters() {
    let h = TestHarness::new();
    let author = h.user();
    let article = h.published_article(&author).await;
    VoteService::new(&h.ctx)
        .vote(article.id, h.user().id, VoteAction::Up)
        .await
        .unwrap();

    // A projection still holding the pre-vote snapshot lands last
    assert!(SyncCoordinator::new(&h.ctx).project(&article, "view").await);

    let doc = h.search.document(article.id).unwrap();
    assert_eq!(doc.stars, 1);
}

#[tokio::test]
async fn test_projection_of_deleted_article_is_skipped() {
    let h = TestHarness::new();
    let author = h.user();
    let article = h.published_article(&author).await;
    ArticleService::new(&h.ctx).delete(article.id).await.unwrap();

    assert!(!SyncCoordinator::new(&h.ctx).project(&article, "vote").await);
    assert!(h.search.document(article.id).is_none());
}

#[tokio::test]
async fn test_index_catches_up_after_missed_projection() {
    let h = TestHarness::new();
    let author = h.user();
    let article = h.published_article(&author).await;

    h.search.set_unavailable(true);
    VoteService::new(&h.ctx)
        .vote(article.id, h.user().id, VoteAction::Up)
        .await
        .unwrap();
    assert!(h.search.document(article.id).is_none());

    h.search.set_unavailable(false);
    ArticleService::new(&h.ctx).record_view(article.id).await.unwrap();

    let doc = h.search.document(article.id).unwrap();
    assert_eq!((doc.stars, doc.views), (1, 1));
}

#[tokio::test]
async fn test_record_view_of_missing_article() {
    let h = TestHarness::new();

    let err = ArticleService::new(&h.ctx)
        .record_view(ArticleId::new(5))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "NO_FIND_ARTICLE");
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_starers_and_starred_articles() {
    let h = TestHarness::new();
    let author = h.user();
    let fan = h.user();
    let critic = h.user();
    let first = h.published_article(&author).await;
    let second = h.published_article(&author).await;
    let votes = VoteService::new(&h.ctx);

    votes.vote(first.id, fan.id, VoteAction::Up).await.unwrap();
    votes.vote(second.id, fan.id, VoteAction::Up).await.unwrap();
    votes.vote(first.id, critic.id, VoteAction::Down).await.unwrap();

    let queries = QueryService::new(&h.ctx);
    let starers = queries.starers(first.id, PageRequest::default()).await.unwrap();
    assert_eq!(starers.iter().map(|u| u.id).collect::<Vec<_>>(), vec![fan.id]);

    let mut starred: Vec<_> = queries
        .starred_articles(fan.id, PageRequest::default())
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    starred.sort();
    assert_eq!(starred, vec![first.id, second.id]);

    assert!(queries
        .starred_articles(critic.id, PageRequest::default())
        .await
        .unwrap()
        .is_empty());

    let err = queries
        .starred_articles(UserId::new(999), PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::InvalidUser(_)));
}

#[tokio::test]
async fn test_contributions_and_search() {
    let h = TestHarness::new();
    let admin = h.admin();
    let submissions = SubmissionService::new(&h.ctx);

    let mut request = submit_request();
    request.title = "Zero-copy parsing with nom".to_string();
    let parsed = submissions.submit(admin.id, request).await.unwrap();
    submissions.submit(admin.id, submit_request()).await.unwrap();

    let queries = QueryService::new(&h.ctx);
    let mine = queries
        .contributions(admin.id, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(mine.len(), 2);

    let hits = queries.search("zero-copy", 0).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].article_id, parsed.id);

    let doc = queries.search_document(parsed.id).await.unwrap();
    assert_eq!(doc.title, "Zero-copy parsing with nom");
}

#[tokio::test]
async fn test_article_detail_and_totals() {
    let h = TestHarness::new();
    let author = h.user();
    let admin = h.admin();
    let submitted = SubmissionService::new(&h.ctx)
        .submit(author.id, submit_request())
        .await
        .unwrap();
    let seeded = h.published_article(&admin).await;
    let queries = QueryService::new(&h.ctx);

    let markdown = queries.article_detail(submitted.id).await.unwrap();
    assert_eq!(markdown, Some(format!("# Fetched from {}", submitted.link)));
    assert_eq!(queries.article_detail(seeded.id).await.unwrap(), None);

    let err = queries.article_detail(ArticleId::new(4040)).await.unwrap_err();
    assert_eq!(err.error_code(), "NO_FIND_ARTICLE");

    // Pending and approved articles both count
    assert_eq!(queries.article_totals().await.unwrap(), 2);
    ArticleService::new(&h.ctx).delete(seeded.id).await.unwrap();
    assert_eq!(queries.article_totals().await.unwrap(), 1);
}
