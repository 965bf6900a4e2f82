//! 프로세스 종료 포트 구현 어댑터.

use crate::application::ports::ProcessControl;

/// `std::process::exit`로 즉시 종료한다. 진행 중인 작업은 정리되지 않는다.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl ProcessControl for ProcessExit {
    fn exit(&self, code: i32) {
        std::process::exit(code);
    }
}
