//! `foaf:` namespace: Friend of a Friend.

use crate::vocabulary;

vocabulary! {
    /// FOAF vocabulary.
    pub struct FoafVocabulary;
    prefix = "foaf";
    namespace = "http://xmlns.com/foaf/0.1/";
    label = "Friend of a Friend (FOAF) vocabulary";
    family = Community;
    terms {
        Agent => "Agent";
        Document => "Document";
        Group => "Group";
        Image => "Image";
        LabelProperty => "LabelProperty";
        OnlineAccount => "OnlineAccount";
        OnlineChatAccount => "OnlineChatAccount";
        OnlineEcommerceAccount => "OnlineEcommerceAccount";
        OnlineGamingAccount => "OnlineGamingAccount";
        Organization => "Organization";
        Person => "Person";
        PersonalProfileDocument => "PersonalProfileDocument";
        Project => "Project";
        account => "account";
        accountName => "accountName";
        accountServiceHomepage => "accountServiceHomepage";
        age => "age";
        aimChatID => "aimChatID";
        based_near => "based_near";
        birthday => "birthday";
        currentProject => "currentProject";
        depiction => "depiction";
        depicts => "depicts";
        dnaChecksum => "dnaChecksum";
        familyName => "familyName";
        family_name => "family_name";
        firstName => "firstName";
        focus => "focus";
        fundedBy => "fundedBy";
        geekcode => "geekcode";
        gender => "gender";
        givenName => "givenName";
        givenname => "givenname";
        holdsAccount => "holdsAccount";
        homepage => "homepage";
        icqChatID => "icqChatID";
        img => "img";
        interest => "interest";
        isPrimaryTopicOf => "isPrimaryTopicOf";
        jabberID => "jabberID";
        knows => "knows";
        lastName => "lastName";
        logo => "logo";
        made => "made";
        maker => "maker";
        mbox => "mbox";
        mbox_sha1sum => "mbox_sha1sum";
        member => "member";
        membershipClass => "membershipClass";
        msnChatID => "msnChatID";
        myersBriggs => "myersBriggs";
        name => "name";
        nick => "nick";
        openid => "openid";
        page => "page";
        pastProject => "pastProject";
        phone => "phone";
        plan => "plan";
        primaryTopic => "primaryTopic";
        publications => "publications";
        schoolHomepage => "schoolHomepage";
        sha1 => "sha1";
        skypeID => "skypeID";
        status => "status";
        surname => "surname";
        theme => "theme";
        thumbnail => "thumbnail";
        tipjar => "tipjar";
        title => "title";
        topic => "topic";
        topic_interest => "topic_interest";
        weblog => "weblog";
        workInfoHomepage => "workInfoHomepage";
        workplaceHomepage => "workplaceHomepage";
        yahooChatID => "yahooChatID";
    }
}
