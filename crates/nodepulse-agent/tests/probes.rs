#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use camino_tempfile::Utf8TempDir;

use nodepulse_agent::probe::{
    LoadAvgSource, ProcLoadAvg, SeededUsers, SysinfoLoadAvg, ThreadRngUsers, UserCountSource,
};

fn loadavg_file(content: &str) -> (Utf8TempDir, ProcLoadAvg) {
    let dir = camino_tempfile::tempdir().unwrap();
    let path = dir.path().join("loadavg");
    std::fs::write(&path, content).unwrap();
    (dir, ProcLoadAvg::new(path))
}

#[tokio::test]
async fn proc_loadavg_reads_one_minute() {
    let (_dir, src) = loadavg_file("0.42 0.30 0.20 2/300 1234\n");
    assert_eq!(src.one_minute().await.unwrap(), 0.42);
}

#[tokio::test]
async fn proc_loadavg_missing_file() {
    let src = ProcLoadAvg::new("/definitely/not/here/loadavg");
    let err = src.one_minute().await.expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "METRIC_UNAVAILABLE");
}

#[tokio::test]
async fn proc_loadavg_garbage() {
    let (_dir, src) = loadavg_file("hello\n");
    let err = src.one_minute().await.expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "METRIC_UNAVAILABLE");
}

#[tokio::test]
async fn sysinfo_loadavg_reports_host_value() {
    match SysinfoLoadAvg.one_minute().await {
        Ok(one) => {
            assert!(one.is_finite());
            assert!(one >= 0.0);
        }
        Err(err) => {
            assert!(cfg!(windows) || !sysinfo::IS_SUPPORTED_SYSTEM);
            assert_eq!(err.client_code().as_str(), "METRIC_UNAVAILABLE");
        }
    }
}

#[test]
fn thread_rng_stays_in_range() {
    let src = ThreadRngUsers;
    for _ in 0..2000 {
        let v = src.next_in_range(10..=50);
        assert!((10..=50).contains(&v), "out of range: {v}");
    }
}

#[test]
fn seeded_users_is_reproducible() {
    let a = SeededUsers::new(7);
    let b = SeededUsers::new(7);
    let sa: Vec<u32> = (0..32).map(|_| a.next_in_range(10..=50)).collect();
    let sb: Vec<u32> = (0..32).map(|_| b.next_in_range(10..=50)).collect();
    assert_eq!(sa, sb);
    assert!(sa.iter().all(|v| (10..=50).contains(v)));
}

#[test]
fn seeded_users_hits_both_bounds() {
    let src = SeededUsers::new(1);
    let samples: Vec<u32> = (0..5000).map(|_| src.next_in_range(10..=50)).collect();
    assert!(samples.contains(&10));
    assert!(samples.contains(&50));
}
