use easy_ext::ext;

#[ext(ErrorExt)]
pub impl<E> E
where
    E: std::error::Error + ?Sized,
{
    /// Displays the error together with the chain of its sources
    fn display_chain(&self) -> display_error_chain::DisplayErrorChain<&Self> {
        display_error_chain::DisplayErrorChain::new(self)
    }
}
