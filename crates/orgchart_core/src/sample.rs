//! Built-in sample organization.
//!
//! Demo roster: one chief executive, five department heads and their
//! reporting chains. Useful for first-run UX and as a realistic fixture in
//! tests.

use crate::model::person::Person;
use crate::model::policy::{RootPolicy, DEFAULT_TASK};

/// Name, position, department, manager. The root row is taken from
/// `RootPolicy::default()` instead so the two never drift apart.
const SAMPLE_ROWS: &[(&str, &str, &str, &str)] = &[
    ("최개발부장", "개발부장", "개발팀", "강필구"),
    ("정마케팅부장", "마케팅부장", "마케팅팀", "강필구"),
    ("홍영업부장", "영업부장", "영업팀", "강필구"),
    ("김인사부장", "인사부장", "인사팀", "강필구"),
    ("이재무부장", "재무부장", "재무팀", "강필구"),
    ("박프론트차장", "프론트엔드차장", "개발팀", "최개발부장"),
    ("최백엔드차장", "백엔드차장", "개발팀", "최개발부장"),
    ("정모바일차장", "모바일차장", "개발팀", "최개발부장"),
    ("홍디지털차장", "디지털마케팅차장", "마케팅팀", "정마케팅부장"),
    ("김브랜드차장", "브랜드차장", "마케팅팀", "정마케팅부장"),
    ("이B2B차장", "B2B영업차장", "영업팀", "홍영업부장"),
    ("박B2C차장", "B2C영업차장", "영업팀", "홍영업부장"),
    ("최채용차장", "채용차장", "인사팀", "김인사부장"),
    ("정교육차장", "교육차장", "인사팀", "김인사부장"),
    ("홍회계차장", "회계차장", "재무팀", "이재무부장"),
    ("김예산차장", "예산차장", "재무팀", "이재무부장"),
    ("이리액트과장", "React개발과장", "개발팀", "박프론트차장"),
    ("최노드과장", "Node.js과장", "개발팀", "최백엔드차장"),
    ("홍안드로이드과장", "Android과장", "개발팀", "정모바일차장"),
    ("이SEO과장", "SEO과장", "마케팅팀", "홍디지털차장"),
    ("최제품과장", "제품마케팅과장", "마케팅팀", "김브랜드차장"),
    ("정기업과장", "기업영업과장", "영업팀", "이B2B차장"),
    ("홍소매과장", "소매영업과장", "영업팀", "박B2C차장"),
    ("김채용과장", "채용과장", "인사팀", "최채용차장"),
    ("이회계과장", "회계과장", "재무팀", "홍회계차장"),
    ("김프론트대리", "프론트엔드대리", "개발팀", "이리액트과장"),
    ("이백엔드대리", "백엔드대리", "개발팀", "최노드과장"),
    ("박모바일대리", "모바일대리", "개발팀", "홍안드로이드과장"),
    ("최마케팅대리", "마케팅대리", "마케팅팀", "이SEO과장"),
    ("정영업대리", "영업대리", "영업팀", "정기업과장"),
    ("홍인사대리", "인사대리", "인사팀", "김채용과장"),
    ("김재무대리", "재무대리", "재무팀", "이회계과장"),
    ("이개발사원1", "개발사원", "개발팀", "김프론트대리"),
    ("박개발사원2", "개발사원", "개발팀", "이백엔드대리"),
    ("정마케팅사원1", "마케팅사원", "마케팅팀", "최마케팅대리"),
    ("홍영업사원1", "영업사원", "영업팀", "정영업대리"),
    ("김인사사원1", "인사사원", "인사팀", "홍인사대리"),
    ("이재무사원1", "재무사원", "재무팀", "김재무대리"),
];

/// Builds the sample roster with fresh ids.
///
/// The rows reference the default root by name, so this fixture pairs with
/// `RootPolicy::default()`.
pub fn sample_people() -> Vec<Person> {
    let mut people = vec![RootPolicy::default().canonical_root()];
    people.extend(SAMPLE_ROWS.iter().map(|(name, position, department, manager)| {
        Person::new(*name, *position, DEFAULT_TASK, *department, *manager)
    }));
    people
}
