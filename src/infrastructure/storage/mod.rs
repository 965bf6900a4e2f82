//! `Repository<T>` 포트 구현체.
//! 파일 기반은 레코드 하나당 JSON 파일 하나, 메모리 기반은 테스트/임시 실행용이다.

mod json_file;
mod memory;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;

/// 파일 이름으로 쓸 수 있는 식별자인지 확인한다.
fn is_storable_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\'])
        && !id.contains(char::is_control)
}
