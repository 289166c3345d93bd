mod index;
mod new;
