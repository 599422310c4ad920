//! Bundled default document
//!
//! Used on first open and by `reset`. Dates are offsets from the day the
//! document is generated, so the template always lands in the current
//! planning window.

use chrono::{Duration, Local};

use super::okr::{KeyResult, Objective};
use super::task::{STRATEGIES, Status, Task};
use super::AppData;

/// Today plus `delta_days`, formatted `YYYY-MM-DD`
fn date_x(delta_days: i64) -> String {
    (Local::now().date_naive() + Duration::days(delta_days))
        .format("%Y-%m-%d")
        .to_string()
}

fn template_task(
    id: &str,
    strategy: &str,
    description: &str,
    owner: &str,
    start: i64,
    due: i64,
    status: Status,
    progress: i64,
    kpi: &str,
    target: &str,
) -> Task {
    Task {
        id: id.to_string(),
        strategy: strategy.to_string(),
        description: description.to_string(),
        owner: owner.to_string(),
        start: date_x(start),
        due: date_x(due),
        status,
        progress,
        kpi: kpi.to_string(),
        target: target.to_string(),
        notes: String::new(),
    }
}

/// Build the default document: one task per strategic pillar plus a sample
/// objective, cycle Q4-2025.
pub fn default_data() -> AppData {
    AppData {
        cycle: "Q4-2025".to_string(),
        tasks: vec![
            template_task(
                "T-01",
                STRATEGIES[0],
                "Audit aktivitas 2 minggu: identifikasi 20% pekerjaan high-impact & eliminasi/otomasi 10% low-value.",
                "Head Ops",
                0,
                14,
                Status::InProgress,
                40,
                "% waktu high-impact",
                "≥ 70%",
            ),
            template_task(
                "T-02",
                STRATEGIES[1],
                "Tetapkan 3 Objective & 8-10 KR terukur; publikasikan di dashboard tim.",
                "PMO",
                0,
                10,
                Status::InProgress,
                30,
                "KR terdefinisi lengkap",
                "≥ 90%",
            ),
            template_task(
                "T-03",
                STRATEGIES[2],
                "Pemetaan value stream + hilangkan 3 waste utama; set WIP limit.",
                "Ops Excellence",
                5,
                25,
                Status::NotStarted,
                0,
                "Lead time (hari)",
                "≤ 5",
            ),
            template_task(
                "T-04",
                STRATEGIES[3],
                "Standard meeting: agenda jelas, notulen & aksi ter-assign; batasi durasi 25/50 menit.",
                "All Managers",
                3,
                18,
                Status::InProgress,
                50,
                "% meeting on-time",
                "≥ 85%",
            ),
            template_task(
                "T-05",
                STRATEGIES[4],
                "Rancang kurikulum microlearning mingguan (60 menit) + mentoring.",
                "People Dev",
                7,
                30,
                Status::NotStarted,
                0,
                "Jam pelatihan/pegawai",
                "≥ 2/jam bln",
            ),
            template_task(
                "T-06",
                STRATEGIES[5],
                "Implementasi weekly 1:1 dan feedback 360° triwulanan.",
                "People Manager",
                2,
                20,
                Status::InProgress,
                35,
                "Frekuensi 1:1",
                "≥ 90% terselenggara",
            ),
            template_task(
                "T-07",
                STRATEGIES[6],
                "Segmentasi TRM: tentukan tingkat bimbingan per individu; rencana coaching 8 minggu.",
                "Leads",
                1,
                21,
                Status::NotStarted,
                0,
                "Autonomy score",
                "↑ 20%",
            ),
            template_task(
                "T-08",
                STRATEGIES[7],
                "Deklarasi nilai & prinsip operasional; integrasi ke SOP dan penilaian.",
                "Culture Council",
                6,
                28,
                Status::NotStarted,
                0,
                "% karyawan paham nilai",
                "≥ 95%",
            ),
            template_task(
                "T-09",
                STRATEGIES[8],
                "Pilih & implement 2 alat otomasi (mis: template OKR, bot notulen).",
                "Automation Team",
                4,
                24,
                Status::InProgress,
                20,
                "Jam hemat/bulan",
                "≥ 80 jam",
            ),
            template_task(
                "T-10",
                STRATEGIES[9],
                "Ritual refleksi bulanan: review metrik, pelajaran, & perbaikan.",
                "All Hands",
                12,
                40,
                Status::NotStarted,
                0,
                "Aksi perbaikan ditutup",
                "≥ 80%",
            ),
        ],
        okrs: vec![Objective {
            id: "O-1".to_string(),
            objective: "Meningkatkan output tim 30% dalam 90 hari".to_string(),
            owner: "Head Ops".to_string(),
            cycle: "Q4-2025".to_string(),
            key_results: vec![
                KeyResult {
                    kr: "Throughput fitur selesai/bulan".to_string(),
                    baseline: 12.0,
                    target: 16.0,
                    current: 13.0,
                },
                KeyResult {
                    kr: "Rata-rata WIP".to_string(),
                    baseline: 14.0,
                    target: 8.0,
                    current: 11.0,
                },
                KeyResult {
                    kr: "Skor kepuasan karyawan".to_string(),
                    baseline: 4.2,
                    target: 4.5,
                    current: 4.3,
                },
            ],
        }],
    }
}
