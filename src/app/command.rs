/// Every operation a key press can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveCursor(isize),
    JumpTop,
    JumpBottom,
    ToggleExpand,
    ExpandAll,
    CollapseAll,
    CopyPath,
    CopyValue,
    ToggleHelp,
    CloseFloating,
    Quit,
}
